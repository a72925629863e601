//! Filter categories
//!
//! The four categorical attributes a country can be filtered by. The
//! declaration order of [`Category::ALL`] is the canonical order used
//! whenever category names are joined into a label.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A categorical attribute of the source tables.
///
/// # Example
///
/// ```
/// use overlap_domain::Category;
///
/// let category: Category = "funders".parse().unwrap();
/// assert_eq!(category, Category::Funder);
/// assert_eq!(category.plural(), "Funders");
/// assert_eq!(Category::Project.column(), "Project Name");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Program,
    Center,
    Funder,
    Project,
}

impl Category {
    /// All categories in canonical order (Programs, Centers, Funders, Projects)
    pub const ALL: [Category; 4] = [
        Category::Program,
        Category::Center,
        Category::Funder,
        Category::Project,
    ];

    /// Position in the canonical order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Plural display name used inside overlap labels
    pub fn plural(self) -> &'static str {
        match self {
            Category::Program => "Programs",
            Category::Center => "Centers",
            Category::Funder => "Funders",
            Category::Project => "Projects",
        }
    }

    /// Column header of this category in the source tables
    pub fn column(self) -> &'static str {
        match self {
            Category::Program => "Program",
            Category::Center => "Center",
            Category::Funder => "Funder",
            Category::Project => "Project Name",
        }
    }

    /// Lowercase keyword accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Program => "program",
            Category::Center => "center",
            Category::Funder => "funder",
            Category::Project => "project",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "program" | "programs" => Ok(Category::Program),
            "center" | "centers" => Ok(Category::Center),
            "funder" | "funders" => Ok(Category::Funder),
            "project" | "projects" | "project name" => Ok(Category::Project),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.plural()).collect();
        assert_eq!(names, vec!["Programs", "Centers", "Funders", "Projects"]);
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Program".parse::<Category>().ok(), Some(Category::Program));
        assert_eq!("centers".parse::<Category>().ok(), Some(Category::Center));
        assert_eq!(" FUNDER ".parse::<Category>().ok(), Some(Category::Funder));
        assert_eq!("Project Name".parse::<Category>().ok(), Some(Category::Project));
        assert_eq!(
            "region".parse::<Category>(),
            Err(DomainError::UnknownCategory("region".to_string()))
        );
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Category::Center).unwrap();
        assert_eq!(json, "\"center\"");
    }
}
