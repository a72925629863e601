//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod audit_names;
pub mod compute_overlap;
pub mod data_context;
pub mod export_report;
pub mod render_map;

#[cfg(test)]
pub(crate) mod test_support;
