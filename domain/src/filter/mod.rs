//! Filter selection
//!
//! Categories, user selections and the source [`Dataset`](dataset::Dataset)
//! that resolves a selection into a set of countries.

pub mod category;
pub mod category_set;
pub mod dataset;
pub mod selection;
pub mod table;

pub use category::Category;
pub use category_set::CategorySet;
pub use dataset::{Association, CategoryRow, Dataset, COUNTRY_COLUMN};
pub use selection::Selection;
pub use table::SourceTable;
