//! hf-roles: infer what each raw dataset column means.
//!
//! Headers coming off a test stand are inconsistent ("Time_s", "t", "PT-101 psi",
//! "LoadCell_N", ...). The classifier scores every header against a table of
//! keyword fragments per [`Role`] and produces a [`RoleMapping`] in which every
//! header is claimed by at most one role.
//!
//! The keyword table is plain configuration: hosts can build their own or
//! deserialize one, and adding a role only means adding a rule.

pub mod classify;
pub mod error;
pub mod keywords;
pub mod mapping;
pub mod role;

pub use classify::{classify, classify_dataset};
pub use error::{RoleError, RoleResult};
pub use keywords::{DEFAULT_MATCH_SCORE, KeywordRule, KeywordTable};
pub use mapping::RoleMapping;
pub use role::Role;
