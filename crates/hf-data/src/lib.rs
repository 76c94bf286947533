//! hf-data: in-memory test-stand dataset and plot selections.
//!
//! The dataset is produced by an external loader through the [`DataSource`]
//! trait and stored column-major; every row shares the same header set.
//! [`Selection`] names a point or an inclusive row interval of that dataset.

pub mod dataset;
pub mod error;
pub mod selection;

pub use dataset::{DataSource, Dataset, Row};
pub use error::{DataError, DataResult};
pub use selection::{Selection, Window};
