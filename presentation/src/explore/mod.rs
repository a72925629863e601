//! Interactive explorer module
//!
//! Provides a readline-based interface for building a selection step by
//! step and watching the classification change.

mod repl;

pub use repl::{ExploreRepl, ReplCommand};
