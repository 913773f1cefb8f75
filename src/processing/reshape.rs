//! Reshape a [`MeanTable`] into a group-by-depth [`OutputTable`] (JSONP path).

use crate::error::{RarefactionError, RarefactionResult};
use crate::types::{Cell, GROUPS_HEADER_LABEL, MeanTable, OutputTable};

/// Lay out one row per group, `[group, mean_at_depth_0, mean_at_depth_1, ...]`.
///
/// Every group must list exactly the same depths in the same order as the first group; that
/// shared sequence becomes the header. An empty table yields a header holding only the label.
pub fn reshape_means(table: &MeanTable) -> RarefactionResult<OutputTable> {
    let mut expected: Option<Vec<String>> = None;
    let mut rows = Vec::with_capacity(table.len());

    for group in table.groups() {
        let labels = group.depth_labels();
        let first = expected.get_or_insert_with(|| labels.clone());
        if *first != labels {
            return Err(RarefactionError::InconsistentDepths {
                group: group.name().to_string(),
                expected: first.clone(),
                found: labels,
            });
        }

        let mut row = Vec::with_capacity(group.depths().len() + 1);
        row.push(Cell::Label(group.name().to_string()));
        row.extend(group.depths().iter().map(|(_, v)| Cell::Value(*v)));
        rows.push(row);
    }

    let mut header = vec![Cell::Label(GROUPS_HEADER_LABEL.to_string())];
    header.extend(expected.unwrap_or_default().into_iter().map(Cell::Depth));

    Ok(OutputTable::new(header, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_header_and_rows() {
        let mut t = MeanTable::new();
        t.insert("A", "10", 1.5);
        t.insert("A", "20", 2.5);
        t.insert("B", "10", 3.0);
        t.insert("B", "20", 4.0);

        let out = reshape_means(&t).unwrap();
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.column_count(), 3);
        assert_eq!(
            out.header,
            vec![
                Cell::Label("Group Name\\Depths".to_string()),
                Cell::Depth("10".to_string()),
                Cell::Depth("20".to_string()),
            ]
        );
        assert_eq!(
            out.rows[1],
            vec![Cell::Label("B".to_string()), Cell::Value(3.0), Cell::Value(4.0)]
        );
    }

    #[test]
    fn same_length_but_different_depths_is_inconsistent() {
        let mut t = MeanTable::new();
        t.insert("A", "10", 1.0);
        t.insert("A", "20", 1.0);
        t.insert("B", "10", 1.0);
        t.insert("B", "30", 1.0);

        match reshape_means(&t).unwrap_err() {
            RarefactionError::InconsistentDepths { group, expected, found } => {
                assert_eq!(group, "B");
                assert_eq!(expected, vec!["10", "20"]);
                assert_eq!(found, vec!["10", "30"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_depth_is_inconsistent() {
        let mut t = MeanTable::new();
        t.insert("A", "10", 1.0);
        t.insert("A", "20", 1.0);
        t.insert("B", "10", 1.0);

        let err = reshape_means(&t).unwrap_err();
        assert!(err.to_string().contains("depths don't match"));
    }

    #[test]
    fn empty_table_has_label_only_header() {
        let out = reshape_means(&MeanTable::new()).unwrap();
        assert_eq!(out.column_count(), 1);
        assert_eq!(out.row_count(), 0);
    }
}
