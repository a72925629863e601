//! Overlap classification
//!
//! The core of the dashboard: given the country sets of up to four
//! active categories,
//!
//! - [`classify`] labels every country by the categories it belongs to
//! - [`select_headline`] reports one overlap figure, chosen by a fixed
//!   priority order over the active categories
//!
//! Both are pure functions of [`CategoryCountrySets`]; every change to a
//! selection recomputes them from scratch.

pub mod classifier;
pub mod country_sets;
pub mod headline;
pub mod label;
pub mod report;

pub use classifier::{ClassificationResult, StatusRecord, classify};
pub use country_sets::CategoryCountrySets;
pub use headline::{HEADLINE_RULES, HeadlineOverlap, HeadlineRule, overlap_percentage, select_headline};
pub use label::OverlapLabel;
pub use report::{CategoryAssociations, OverlapReport};
