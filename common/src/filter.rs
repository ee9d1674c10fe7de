use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryId};
use crate::food::Food;

/// Category selector of the menu view: everything, or one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(CategoryId),
}

impl CategoryFilter {
    /// Selector shown right after a catalog loads: the first category, or
    /// `All` when the tenant has none.
    pub fn initial(categories: &[Category]) -> Self {
        categories
            .first()
            .map(|c| CategoryFilter::Category(c.id))
            .unwrap_or(CategoryFilter::All)
    }

    pub fn matches(&self, food: &Food) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => food.category_id == *id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryFilterError(String);

impl fmt::Display for ParseCategoryFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected \"all\" or a category id, got {:?}", self.0)
    }
}

impl std::error::Error for ParseCategoryFilterError {}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<u64>()
            .map(|id| CategoryFilter::Category(CategoryId(id)))
            .map_err(|_| ParseCategoryFilterError(s.to_string()))
    }
}

/// Narrow `foods` to the selected category and the free-text `query`.
///
/// A blank query matches everything. Otherwise the lowercased query must be a
/// substring of the lowercased name or description. Input order is kept.
pub fn filter_foods<'a>(foods: &'a [Food], selector: &CategoryFilter, query: &str) -> Vec<&'a Food> {
    let needle = (!query.trim().is_empty()).then(|| query.to_lowercase());
    foods
        .iter()
        .filter(|food| selector.matches(food))
        .filter(|food| needle.as_deref().is_none_or(|n| food.matches_lowercase(n)))
        .collect()
}
