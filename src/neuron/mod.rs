// Neuron metadata: categories, descriptors and on-disk discovery

pub mod catalog;
pub mod descriptor;

pub use catalog::*;
pub use descriptor::*;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level neuron category. Membership comes only from the directory a
/// neuron lives under, never from descriptor content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Analyzers,
    Responders,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Analyzers, Category::Responders];

    /// Directory name, both in the input tree and under the docs root
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Analyzers => "analyzers",
            Category::Responders => "responders",
        }
    }

    /// Label used for the navigation group
    pub fn nav_label(self) -> &'static str {
        match self {
            Category::Analyzers => "Analyzers",
            Category::Responders => "Responders",
        }
    }

    /// Label introducing the data type list in the identity block
    pub fn data_types_label(self) -> &'static str {
        match self {
            Category::Analyzers => "Supported observables types",
            Category::Responders => "Supported data types",
        }
    }

    /// Only analyzers produce report templates worth showing
    pub fn has_template_samples(self) -> bool {
        matches!(self, Category::Analyzers)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "analyzers" | "analyzer" => Ok(Category::Analyzers),
            "responders" | "responder" => Ok(Category::Responders),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Analyzers.dir_name(), "analyzers");
        assert_eq!(Category::Responders.nav_label(), "Responders");
        assert_eq!(
            Category::Analyzers.data_types_label(),
            "Supported observables types"
        );
        assert_eq!(Category::Responders.data_types_label(), "Supported data types");
    }

    #[test]
    fn test_only_analyzers_have_samples() {
        assert!(Category::Analyzers.has_template_samples());
        assert!(!Category::Responders.has_template_samples());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("analyzers".parse::<Category>().unwrap(), Category::Analyzers);
        assert_eq!("Responder".parse::<Category>().unwrap(), Category::Responders);
        assert!("dev_guides".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Responders.to_string(), "responders");
    }
}
