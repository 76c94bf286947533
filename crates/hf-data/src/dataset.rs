//! Column-major test-stand dataset.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{DataError, DataResult};

/// One row as handed over by a loader: header → numeric-or-missing value.
pub type Row = BTreeMap<String, Option<f64>>;

/// Collaborator that yields an already-parsed table.
///
/// Loaders (CSV, spreadsheets, telemetry dumps) live outside this crate and
/// only need to expose ordered headers and ordered rows.
pub trait DataSource {
    /// Column headers in file order.
    fn headers(&self) -> Vec<String>;

    /// Rows in time order.
    fn rows(&self) -> Vec<Row>;
}

/// Parsed dataset with one `Vec<Option<f64>>` per header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    headers: Vec<String>,
    columns: Vec<Vec<Option<f64>>>,
    row_count: usize,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(header, values)` pairs. All columns must have equal length.
    pub fn from_columns<I, S>(columns: I) -> DataResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<Option<f64>>)>,
        S: Into<String>,
    {
        let mut headers = Vec::new();
        let mut values = Vec::new();
        let mut seen = BTreeSet::new();
        let mut row_count = None;

        for (header, column) in columns {
            let header = header.into();
            if !seen.insert(header.clone()) {
                return Err(DataError::DuplicateHeader { header });
            }
            let expected = *row_count.get_or_insert(column.len());
            if column.len() != expected {
                return Err(DataError::LengthMismatch {
                    header,
                    len: column.len(),
                    expected,
                });
            }
            headers.push(header);
            values.push(column);
        }

        Ok(Self {
            headers,
            columns: values,
            row_count: row_count.unwrap_or(0),
        })
    }

    /// Convenience constructor for fully-populated columns.
    pub fn from_dense_columns<I, S>(columns: I) -> DataResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        Self::from_columns(
            columns
                .into_iter()
                .map(|(h, v)| (h, v.into_iter().map(Some).collect())),
        )
    }

    /// Pull headers and rows from a loader, enforcing the shared-header invariant.
    pub fn from_source<D: DataSource + ?Sized>(source: &D) -> DataResult<Self> {
        let headers = source.headers();
        let rows = source.rows();

        let mut columns: Vec<Vec<Option<f64>>> = headers
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(DataError::RaggedRow {
                    row: row_idx,
                    detail: format!("{} values for {} headers", row.len(), headers.len()),
                });
            }
            for (col, header) in headers.iter().enumerate() {
                let value = row.get(header).ok_or_else(|| DataError::RaggedRow {
                    row: row_idx,
                    detail: format!("missing '{header}'"),
                })?;
                columns[col].push(*value);
            }
        }

        Self::from_columns(headers.into_iter().zip(columns))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn has_column(&self, header: &str) -> bool {
        self.headers.iter().any(|h| h == header)
    }

    pub fn column(&self, header: &str) -> DataResult<&[Option<f64>]> {
        self.headers
            .iter()
            .position(|h| h == header)
            .map(|idx| self.columns[idx].as_slice())
            .ok_or_else(|| DataError::UnknownHeader {
                header: header.to_string(),
            })
    }

    pub fn value(&self, header: &str, row: usize) -> DataResult<Option<f64>> {
        let column = self.column(header)?;
        column
            .get(row)
            .copied()
            .ok_or_else(|| DataError::InvalidSelection {
                reason: format!("row {row} out of bounds for {} rows", self.row_count),
            })
    }

    /// Index of the sample in `header` closest to `target`.
    ///
    /// Used to turn a plot x-coordinate (usually time) into a row index.
    /// Missing samples are skipped; ties resolve to the earlier row.
    pub fn nearest_index(&self, header: &str, target: f64) -> DataResult<Option<usize>> {
        let column = self.column(header)?;
        let mut best: Option<(usize, f64)> = None;
        for (idx, value) in column.iter().enumerate() {
            let Some(v) = value else { continue };
            let dist = (v - target).abs();
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((idx, dist)),
            }
        }
        Ok(best.map(|(idx, _)| idx))
    }
}

impl DataSource for Dataset {
    fn headers(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn rows(&self) -> Vec<Row> {
        (0..self.row_count)
            .map(|row| {
                self.headers
                    .iter()
                    .zip(&self.columns)
                    .map(|(h, col)| (h.clone(), col[row]))
                    .collect()
            })
            .collect()
    }
}
