use rarefaction_summary::ingestion::csv::{load_csv_from_path, load_csv_from_reader, reader_builder};
use rarefaction_summary::processing::{extract_depths, window_stats, StatMethod};
use rarefaction_summary::RarefactionError;

#[test]
fn load_csv_from_path_happy_path() {
    let table = load_csv_from_path("tests/fixtures/observed_features.csv").unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.header.len(), 8);
    assert_eq!(table.header[0], "sample-id");
    assert_eq!(
        table.rows[0],
        vec!["S1", "5", "7", "6", "40", "42", "47", "gut"]
    );
}

#[test]
fn load_csv_missing_file_is_input_read_error() {
    let err = load_csv_from_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, RarefactionError::InputRead(_)));
}

#[test]
fn stat_rows_match_sample_rows() {
    let input = "sample,depth-1_iter-1,depth-1_iter-2\nA,1,2\nB,3,4\nC,5,6\n";
    let mut rdr = reader_builder().from_reader(input.as_bytes());
    let table = load_csv_from_reader(&mut rdr).unwrap();

    let stats = window_stats(&table.rows, StatMethod::Median, 2).unwrap();
    assert_eq!(stats.len(), table.row_count());
    let samples: Vec<&str> = stats.iter().map(|s| s.sample.as_str()).collect();
    assert_eq!(samples, vec!["A", "B", "C"]);
}

#[test]
fn header_depths_are_ascending() {
    let input = "sample,depth-500_iter-1,depth-20_iter-1,depth-1000_iter-1\nA,1,2,3\n";
    let mut rdr = reader_builder().from_reader(input.as_bytes());
    let table = load_csv_from_reader(&mut rdr).unwrap();

    assert_eq!(extract_depths(&table).unwrap().as_slice(), &[20, 500, 1000]);
}
