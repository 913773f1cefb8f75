//! Core data model types shared by both pipelines.
//!
//! Loaders produce a [`RawTable`] (CSV) or a JSON payload (JSONP), aggregators turn those into
//! [`StatRow`]s or a [`MeanTable`], and both paths end in an [`OutputTable`] that the TSV writer
//! serializes.

use std::collections::{BTreeSet, HashMap};

/// Label placed in the first header cell of a CSV-derived table.
pub const SAMPLES_HEADER_LABEL: &str = "samples\\depth";

/// Label placed in the first header cell of a JSONP-derived table.
pub const GROUPS_HEADER_LABEL: &str = "Group Name\\Depths";

/// Untyped CSV contents: the header row plus sample rows, all cells kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    /// Column labels, e.g. `sample,depth-1_iter-1,...`.
    pub header: Vec<String>,
    /// Sample rows. Column 0 is the sample name. Rows may differ in length.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a raw table from a header and sample rows.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Number of sample rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Unique sampling depths, kept in ascending numeric order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DepthSet {
    depths: Vec<u64>,
}

impl DepthSet {
    /// Number of distinct depths.
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Depths in ascending order.
    pub fn as_slice(&self) -> &[u64] {
        &self.depths
    }

    /// Render as a header row: `label` followed by each depth.
    pub fn to_header(&self, label: &str) -> Vec<Cell> {
        std::iter::once(Cell::Label(label.to_string()))
            .chain(self.depths.iter().map(|d| Cell::Depth(d.to_string())))
            .collect()
    }
}

impl FromIterator<u64> for DepthSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let unique: BTreeSet<u64> = iter.into_iter().collect();
        Self {
            depths: unique.into_iter().collect(),
        }
    }
}

/// One sample's statistic per depth window.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub sample: String,
    pub values: Vec<f64>,
}

impl StatRow {
    pub fn new(sample: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            sample: sample.into(),
            values,
        }
    }

    /// Convert into an output row: the sample name followed by the values.
    pub fn into_cells(self) -> Vec<Cell> {
        std::iter::once(Cell::Label(self.sample))
            .chain(self.values.into_iter().map(Cell::Value))
            .collect()
    }
}

/// Per-depth means for a single group, in first-seen depth order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMeans {
    name: String,
    depths: Vec<(String, f64)>,
    positions: HashMap<String, usize>,
}

impl GroupMeans {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            depths: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `(depth label, mean)` pairs in insertion order.
    pub fn depths(&self) -> &[(String, f64)] {
        &self.depths
    }

    /// Depth labels in insertion order.
    pub fn depth_labels(&self) -> Vec<String> {
        self.depths.iter().map(|(d, _)| d.clone()).collect()
    }

    fn insert(&mut self, depth: &str, mean: f64) {
        match self.positions.get(depth) {
            Some(&idx) => self.depths[idx].1 = mean,
            None => {
                self.positions.insert(depth.to_string(), self.depths.len());
                self.depths.push((depth.to_string(), mean));
            }
        }
    }

    fn get(&self, depth: &str) -> Option<f64> {
        self.positions.get(depth).map(|&idx| self.depths[idx].1)
    }
}

/// Mapping of group name to (depth label to mean), preserving first-insertion order at both
/// levels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeanTable {
    groups: Vec<GroupMeans>,
    positions: HashMap<String, usize>,
}

impl MeanTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mean` for `(group, depth)`.
    ///
    /// A repeated `(group, depth)` pair overwrites the earlier value without changing its
    /// position.
    pub fn insert(&mut self, group: &str, depth: &str, mean: f64) {
        let idx = match self.positions.get(group) {
            Some(&idx) => idx,
            None => {
                self.positions.insert(group.to_string(), self.groups.len());
                self.groups.push(GroupMeans::new(group));
                self.groups.len() - 1
            }
        };
        self.groups[idx].insert(depth, mean);
    }

    /// Look up the mean recorded for `(group, depth)`.
    pub fn get(&self, group: &str, depth: &str) -> Option<f64> {
        let &idx = self.positions.get(group)?;
        self.groups[idx].get(depth)
    }

    pub fn groups(&self) -> &[GroupMeans] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A single output cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Free text written verbatim (header label, sample or group name).
    Label(String),
    /// A depth label; written with `,` as decimal separator.
    Depth(String),
    /// A computed statistic; written with `,` as decimal separator.
    Value(f64),
}

/// Header row plus data rows, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl OutputTable {
    pub fn new(header: Vec<Cell>, rows: Vec<Vec<Cell>>) -> Self {
        Self { header, rows }
    }

    /// Build the CSV-path table from a depth header and per-sample statistics.
    pub fn from_stat_rows(depths: &DepthSet, rows: Vec<StatRow>) -> Self {
        Self {
            header: depths.to_header(SAMPLES_HEADER_LABEL),
            rows: rows.into_iter().map(StatRow::into_cells).collect(),
        }
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of header columns, label cell included.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_set_is_sorted_and_unique() {
        let set: DepthSet = [500, 10, 500, 100, 10].into_iter().collect();
        assert_eq!(set.as_slice(), &[10, 100, 500]);
        assert_eq!(
            set.to_header(SAMPLES_HEADER_LABEL),
            vec![
                Cell::Label("samples\\depth".to_string()),
                Cell::Depth("10".to_string()),
                Cell::Depth("100".to_string()),
                Cell::Depth("500".to_string()),
            ]
        );
    }

    #[test]
    fn mean_table_preserves_insertion_order_and_overwrites() {
        let mut t = MeanTable::new();
        t.insert("B", "10", 1.0);
        t.insert("A", "10", 2.0);
        t.insert("B", "20", 3.0);
        t.insert("B", "10", 4.0);

        let names: Vec<&str> = t.groups().iter().map(GroupMeans::name).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(t.groups()[0].depth_labels(), vec!["10", "20"]);
        assert_eq!(t.get("B", "10"), Some(4.0));
        assert_eq!(t.get("C", "10"), None);
    }

    #[test]
    fn mean_table_handles_many_groups_and_repeated_pairs() {
        let mut t = MeanTable::new();
        for g in 0..200 {
            for d in 0..50 {
                t.insert(&format!("G{g}"), &d.to_string(), f64::from(g * d));
            }
        }
        for g in (0..200).rev() {
            t.insert(&format!("G{g}"), "7", -1.0);
        }

        assert_eq!(t.len(), 200);
        assert_eq!(t.groups()[0].name(), "G0");
        assert_eq!(t.groups()[199].name(), "G199");
        let expected: Vec<String> = (0..50).map(|d| d.to_string()).collect();
        assert!(t.groups().iter().all(|g| g.depth_labels() == expected));
        assert_eq!(t.get("G3", "7"), Some(-1.0));
        assert_eq!(t.get("G3", "8"), Some(24.0));
        assert_eq!(t.groups()[3].depths()[7], ("7".to_string(), -1.0));
    }
}
