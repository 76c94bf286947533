//! Plot selections over dataset row indices.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};

/// A user selection on the plotted curve.
///
/// Selections are value objects: a new interaction produces a new selection,
/// an existing one is never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    Point { index: usize },
    Interval { start: usize, end: usize },
}

impl Selection {
    pub fn point(index: usize) -> Self {
        Selection::Point { index }
    }

    pub fn interval(start: usize, end: usize) -> Self {
        Selection::Interval { start, end }
    }

    pub fn first(&self) -> usize {
        match *self {
            Selection::Point { index } => index,
            Selection::Interval { start, .. } => start,
        }
    }

    pub fn last(&self) -> usize {
        match *self {
            Selection::Point { index } => index,
            Selection::Interval { end, .. } => end,
        }
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.first()..=self.last()
    }

    /// Check ordering and bounds against a dataset of `row_count` rows.
    pub fn validate(self, row_count: usize) -> DataResult<Self> {
        if let Selection::Interval { start, end } = self {
            if start > end {
                return Err(DataError::InvalidSelection {
                    reason: format!("start index {start} is after end index {end}"),
                });
            }
        }
        if self.last() >= row_count {
            return Err(DataError::InvalidSelection {
                reason: format!(
                    "index {} out of bounds for {row_count} rows",
                    self.last()
                ),
            });
        }
        Ok(self)
    }
}

/// Resolved inclusive row window a computation runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub first: usize,
    pub last: usize,
}

impl Window {
    /// Window for an optional selection; `None` covers every row.
    pub fn resolve(selection: Option<&Selection>, row_count: usize) -> DataResult<Self> {
        match selection {
            Some(sel) => {
                let sel = sel.validate(row_count)?;
                Ok(Window {
                    first: sel.first(),
                    last: sel.last(),
                })
            }
            None if row_count == 0 => Err(DataError::InvalidSelection {
                reason: "dataset has no rows".to_string(),
            }),
            None => Ok(Window {
                first: 0,
                last: row_count - 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn slice<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        &values[self.first..=self.last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_reversed_interval() {
        let err = Selection::interval(5, 2).validate(10).unwrap_err();
        assert!(matches!(err, DataError::InvalidSelection { .. }));
    }

    #[test]
    fn validate_rejects_out_of_bounds() {
        assert!(Selection::point(10).validate(10).is_err());
        assert!(Selection::interval(3, 10).validate(10).is_err());
        assert!(Selection::point(9).validate(10).is_ok());
    }

    #[test]
    fn window_defaults_to_all_rows() {
        let w = Window::resolve(None, 4).unwrap();
        assert_eq!((w.first, w.last, w.len()), (0, 3, 4));
        assert!(Window::resolve(None, 0).is_err());
    }

    #[test]
    fn point_window_is_single_row() {
        let w = Window::resolve(Some(&Selection::point(2)), 4).unwrap();
        assert_eq!(w.slice(&[10, 11, 12, 13]), &[12]);
    }
}
