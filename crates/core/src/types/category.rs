//! Product categories.
//!
//! The category set is closed: the storefront only ever offers these four
//! tabs, and [`Category::All`] acts as a wildcard that matches every product.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// The input is not one of the known category ids.
    #[error("unknown category: {0}")]
    Unknown(String),
}

/// A catalog category.
///
/// ## Examples
///
/// ```
/// use neural_commerce_core::Category;
///
/// let category: Category = "fitness".parse().unwrap();
/// assert_eq!(category.display_name(), "Fitness");
/// assert!(Category::All.matches(category));
/// assert!("garden".parse::<Category>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Wildcard matching every product.
    #[default]
    All,
    Electronics,
    Fitness,
    Home,
}

impl Category {
    /// Every category, in the order the storefront presents them.
    pub const ALL: [Self; 4] = [Self::All, Self::Electronics, Self::Fitness, Self::Home];

    /// Returns the stable identifier used by input sources.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Electronics => "electronics",
            Self::Fitness => "fitness",
            Self::Home => "home",
        }
    }

    /// Returns the human-readable tab label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::Electronics => "Electronics",
            Self::Fitness => "Fitness",
            Self::Home => "Smart Home",
        }
    }

    /// Returns the icon glyph shown next to the tab label.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::All => "🛍️",
            Self::Electronics => "📱",
            Self::Fitness => "💪",
            Self::Home => "🏠",
        }
    }

    /// Returns true if a product in `product_category` belongs under this tab.
    #[must_use]
    pub fn matches(self, product_category: Self) -> bool {
        self == Self::All || self == product_category
    }

    /// Parse a category from its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::Unknown`] if `s` is not a known category id.
    pub fn parse(s: &str) -> Result<Self, CategoryError> {
        Self::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| CategoryError::Unknown(s.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
