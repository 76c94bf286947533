//! hf-core: shared foundation for the hotfire analysis engine.
//!
//! Contains:
//! - units (uom SI types, constructors, test-stand unit conversions)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{HfError, HfResult};
pub use numeric::*;
pub use units::*;
