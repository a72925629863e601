//! Advisory checks on the source data

pub mod names;

pub use names::{NameAudit, NameMismatch};
