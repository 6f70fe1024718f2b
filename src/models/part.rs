//! Catalog part records.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A single selectable image layer.
///
/// `id` and `src` are opaque: attributes such as skin tone or hair color are
/// always re-derived from them by [`crate::inference`], never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub src: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subcategory: Option<String>,
}

impl Part {
    pub fn new(id: impl Into<String>, category: Category, src: impl Into<String>) -> Self {
        Self { id: id.into(), src: src.into(), category, subcategory: None }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// True if `token` appears in the id or the source path (case-sensitive).
    pub fn mentions(&self, token: &str) -> bool {
        self.id.contains(token) || self.src.contains(token)
    }

    /// Like [`Part::mentions`] but compares lower-cased text.
    pub fn mentions_ignore_case(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.id.to_lowercase().contains(&token) || self.src.to_lowercase().contains(&token)
    }
}
