//! Loader-facing tests: building datasets through the `DataSource` trait.

use hf_data::{DataError, DataSource, Dataset, Row, Selection, Window};

/// Minimal row-oriented loader, shaped like what a CSV reader would hand over.
struct RowTable {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl RowTable {
    fn new(headers: &[&str], rows: &[&[Option<f64>]]) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let rows = rows
            .iter()
            .map(|values| {
                headers
                    .iter()
                    .cloned()
                    .zip(values.iter().copied())
                    .collect::<Row>()
            })
            .collect();
        Self { headers, rows }
    }
}

impl DataSource for RowTable {
    fn headers(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn rows(&self) -> Vec<Row> {
        self.rows.clone()
    }
}

#[test]
fn rows_become_columns_in_header_order() {
    let table = RowTable::new(
        &["Time_s", "Chamber_PSI"],
        &[
            &[Some(0.0), Some(14.7)],
            &[Some(0.1), Some(250.0)],
            &[Some(0.2), None],
        ],
    );

    let ds = Dataset::from_source(&table).unwrap();
    assert_eq!(ds.headers(), &["Time_s".to_string(), "Chamber_PSI".to_string()]);
    assert_eq!(ds.row_count(), 3);
    assert_eq!(
        ds.column("Chamber_PSI").unwrap(),
        &[Some(14.7), Some(250.0), None]
    );
}

#[test]
fn ragged_rows_are_rejected() {
    let mut table = RowTable::new(&["a", "b"], &[&[Some(1.0), Some(2.0)]]);
    let mut short = Row::new();
    short.insert("a".to_string(), Some(3.0));
    table.rows.push(short);

    let err = Dataset::from_source(&table).unwrap_err();
    assert!(matches!(err, DataError::RaggedRow { row: 1, .. }));
}

#[test]
fn rows_with_foreign_headers_are_rejected() {
    let mut table = RowTable::new(&["a", "b"], &[]);
    let mut row = Row::new();
    row.insert("a".to_string(), Some(1.0));
    row.insert("c".to_string(), Some(2.0));
    table.rows.push(row);

    assert!(matches!(
        Dataset::from_source(&table),
        Err(DataError::RaggedRow { row: 0, .. })
    ));
}

#[test]
fn dataset_is_its_own_source() {
    let ds = Dataset::from_dense_columns([("t", vec![0.0, 1.0]), ("f", vec![5.0, 6.0])]).unwrap();
    let again = Dataset::from_source(&ds).unwrap();
    assert_eq!(ds, again);
}

#[test]
fn empty_source_gives_empty_dataset() {
    let table = RowTable::new(&[], &[]);
    let ds = Dataset::from_source(&table).unwrap();
    assert!(ds.is_empty());
    assert!(ds.headers().is_empty());
    assert!(Window::resolve(Some(&Selection::point(0)), ds.row_count()).is_err());
}
