//! Part categories and their selection mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a category holds one part or a set of parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// At most one selected part, stored in `selected_parts`
    Single,
    /// Any number of parts, stored in `selected_items`
    Multi,
}

/// A fixed grouping of parts.
///
/// Variant order follows the category listing used throughout the editor
/// (single-select first), which is also the `Ord` used for map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Head,
    Bodytype,
    Hair,
    Shoes,
    /// Breast option layer
    Brust,
    Values,
    Strengths,
    Face,
    Clothes,
    Accessoires,
    Handicap,
}

impl Category {
    /// Every category, single-select first.
    pub const ALL: [Category; 11] = [
        Category::Head,
        Category::Bodytype,
        Category::Hair,
        Category::Shoes,
        Category::Brust,
        Category::Values,
        Category::Strengths,
        Category::Face,
        Category::Clothes,
        Category::Accessoires,
        Category::Handicap,
    ];

    pub fn select_mode(self) -> SelectMode {
        match self {
            Category::Head
            | Category::Bodytype
            | Category::Hair
            | Category::Shoes
            | Category::Brust
            | Category::Values
            | Category::Strengths => SelectMode::Single,
            Category::Face | Category::Clothes | Category::Accessoires | Category::Handicap => {
                SelectMode::Multi
            }
        }
    }

    pub fn is_single(self) -> bool {
        self.select_mode() == SelectMode::Single
    }

    pub fn is_multi(self) -> bool {
        self.select_mode() == SelectMode::Multi
    }

    /// Categories whose parts carry a skin tone (kept mutually consistent).
    pub fn carries_skin_tone(self) -> bool {
        matches!(self, Category::Bodytype | Category::Head)
    }

    /// Categories filtered against the current body type.
    pub fn follows_body_type(self) -> bool {
        matches!(self, Category::Clothes | Category::Accessoires)
    }

    /// Wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Head => "head",
            Category::Bodytype => "bodytype",
            Category::Hair => "hair",
            Category::Shoes => "shoes",
            Category::Brust => "brust",
            Category::Values => "values",
            Category::Strengths => "strengths",
            Category::Face => "face",
            Category::Clothes => "clothes",
            Category::Accessoires => "accessoires",
            Category::Handicap => "handicap",
        }
    }

    /// Parse a wire name. Matching is exact; unknown names yield `None`.
    pub fn from_str(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
