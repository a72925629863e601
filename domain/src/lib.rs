//! Domain layer for country-overlap
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Filter selection
//!
//! A [`Selection`] holds the labels chosen for each [`Category`]
//! (Program, Center, Funder, Project). The [`Dataset`] resolves each
//! active category to the set of countries its labels cover.
//!
//! ## Overlap classification
//!
//! - **Per-country labels**: every country in at least one active set gets
//!   an [`OverlapLabel`] naming the categories it belongs to
//! - **Headline overlap**: one intersection/union figure, chosen by a
//!   fixed priority order over the active categories

pub mod audit;
pub mod config;
pub mod core;
pub mod filter;
pub mod geo;
pub mod legend;
pub mod overlap;

// Re-export commonly used types
pub use audit::{NameAudit, NameMismatch};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use filter::{
    Association, Category, CategoryRow, CategorySet, Dataset, Selection, SourceTable,
    COUNTRY_COLUMN,
};
pub use geo::{BoundaryCollection, CountryShape, PolygonRings, Ring};
pub use legend::{Legend, Rgb};
pub use overlap::{
    CategoryAssociations, CategoryCountrySets, ClassificationResult, HeadlineOverlap,
    OverlapLabel, OverlapReport, StatusRecord, classify, select_headline,
};
