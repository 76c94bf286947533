//! Selection controller for pointer interactions on the plotted curve.
//!
//! States:
//! - **Idle**: nothing selected, metrics cover the whole dataset
//! - **PointSelected**: a single row
//! - **IntervalSelecting**: a drag is in progress (provisional results only)
//! - **IntervalSelected**: a committed, ordered row range
//!
//! The renderer resolves pointer positions to row indices. Indices arrive
//! signed and possibly out of range; the controller clamps them.

use hf_core::numeric::clamp_index;
use hf_data::Selection;
use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionState {
    #[default]
    Idle,
    PointSelected { index: usize },
    IntervalSelecting { anchor: usize, cursor: usize },
    IntervalSelected { start: usize, end: usize },
}

impl SelectionState {
    /// Committed selection, if any. A drag in progress has none.
    pub fn selection(&self) -> Option<Selection> {
        match *self {
            SelectionState::PointSelected { index } => Some(Selection::point(index)),
            SelectionState::IntervalSelected { start, end } => Some(Selection::interval(start, end)),
            SelectionState::Idle | SelectionState::IntervalSelecting { .. } => None,
        }
    }
}

/// Pointer input, already resolved to a (signed) row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Interaction {
    Click(i64),
    DragStart(i64),
    DragMove(i64),
    DragEnd(i64),
    Clear,
}

/// What a state transition asks the host to recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Mid-drag selection; results are for display only.
    Provisional(Selection),
    Final(Selection),
    Cleared,
}

impl Emission {
    pub fn selection(&self) -> Option<Selection> {
        match *self {
            Emission::Provisional(s) | Emission::Final(s) => Some(s),
            Emission::Cleared => None,
        }
    }

    pub fn is_provisional(&self) -> bool {
        matches!(self, Emission::Provisional(_))
    }
}

fn ordered(a: usize, b: usize) -> Selection {
    Selection::interval(a.min(b), a.max(b))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    state: SelectionState,
    row_count: usize,
}

impl SelectionController {
    pub fn new(row_count: usize) -> Self {
        Self {
            state: SelectionState::Idle,
            row_count,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn selection(&self) -> Option<Selection> {
        self.state.selection()
    }

    /// Forget the current selection and bind to a new dataset size.
    pub fn reset_for(&mut self, row_count: usize) {
        self.state = SelectionState::Idle;
        self.row_count = row_count;
    }

    fn clamp(&self, index: i64) -> SessionResult<usize> {
        clamp_index(index, self.row_count).ok_or_else(|| SessionError::InvalidSelection {
            reason: "dataset has no rows".to_string(),
        })
    }

    /// Advance the state machine.
    ///
    /// Returns `Ok(None)` for inputs that do not apply in the current state
    /// (a stray drag move or end, or clearing while idle). Pointer input on an
    /// empty dataset is an error and leaves the state untouched.
    pub fn apply(&mut self, interaction: Interaction) -> SessionResult<Option<Emission>> {
        let emission = match (interaction, self.state) {
            (Interaction::Clear, _) => return Ok(self.clear()),
            (Interaction::Click(i), _) => {
                let index = self.clamp(i)?;
                self.state = SelectionState::PointSelected { index };
                Some(Emission::Final(Selection::point(index)))
            }
            (Interaction::DragStart(i), _) => {
                let anchor = self.clamp(i)?;
                self.state = SelectionState::IntervalSelecting {
                    anchor,
                    cursor: anchor,
                };
                Some(Emission::Provisional(Selection::interval(anchor, anchor)))
            }
            (Interaction::DragMove(i), SelectionState::IntervalSelecting { anchor, .. }) => {
                let cursor = self.clamp(i)?;
                self.state = SelectionState::IntervalSelecting { anchor, cursor };
                Some(Emission::Provisional(ordered(anchor, cursor)))
            }
            (Interaction::DragEnd(i), SelectionState::IntervalSelecting { anchor, .. }) => {
                let cursor = self.clamp(i)?;
                let selection = ordered(anchor, cursor);
                self.state = SelectionState::IntervalSelected {
                    start: selection.first(),
                    end: selection.last(),
                };
                Some(Emission::Final(selection))
            }
            (Interaction::DragMove(i) | Interaction::DragEnd(i), _) => {
                self.clamp(i)?;
                None
            }
        };
        Ok(emission)
    }

    /// Programmatic selection. Invalid selections are rejected and the
    /// previous state is kept.
    pub fn select(&mut self, selection: Selection) -> SessionResult<Emission> {
        let selection = selection.validate(self.row_count)?;
        self.state = match selection {
            Selection::Point { index } => SelectionState::PointSelected { index },
            Selection::Interval { start, end } => SelectionState::IntervalSelected { start, end },
        };
        Ok(Emission::Final(selection))
    }

    pub fn clear(&mut self) -> Option<Emission> {
        if self.state == SelectionState::Idle {
            return None;
        }
        self.state = SelectionState::Idle;
        Some(Emission::Cleared)
    }
}
