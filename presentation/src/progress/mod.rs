//! Load progress reporting

pub mod reporter;
