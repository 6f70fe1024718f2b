//! The avatar configuration: the complete, serializable selection state.
//!
//! Fields are readable from anywhere but only writable inside the crate, so
//! every mutation goes through [`crate::editor::AvatarEditor`] (or the codec
//! when rebuilding a configuration from a token).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Category, HairChoice, HairColor, SkinTone};

/// Selection state of one avatar.
///
/// The serde form doubles as the persisted snapshot: a plain dump of the
/// fields that round-trips losslessly through JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// One entry per single-select category with an active choice
    #[serde(default)]
    pub(crate) selected_parts: BTreeMap<Category, String>,
    /// Selections under category names this build does not know, kept verbatim
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub(crate) unknown_parts: BTreeMap<String, String>,
    /// Multi-select items in the order they were added, without duplicates
    #[serde(default)]
    pub(crate) selected_items: Vec<String>,
    #[serde(default)]
    pub(crate) skin_tone: SkinTone,
    #[serde(default)]
    pub(crate) hair: HairChoice,
    #[serde(default)]
    pub(crate) breast_option: bool,
}

impl Configuration {
    /// A fresh configuration: default skin tone, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_part(&self, category: Category) -> Option<&str> {
        self.selected_parts.get(&category).map(String::as_str)
    }

    pub fn selected_parts(&self) -> &BTreeMap<Category, String> {
        &self.selected_parts
    }

    pub fn unknown_parts(&self) -> &BTreeMap<String, String> {
        &self.unknown_parts
    }

    pub fn selected_items(&self) -> &[String] {
        &self.selected_items
    }

    pub fn has_item(&self, id: &str) -> bool {
        self.selected_items.iter().any(|i| i == id)
    }

    pub fn skin_tone(&self) -> SkinTone {
        self.skin_tone
    }

    pub fn hair(&self) -> HairChoice {
        self.hair
    }

    pub fn hair_color(&self) -> Option<HairColor> {
        self.hair.color()
    }

    pub fn breast_option(&self) -> bool {
        self.breast_option
    }

    pub(crate) fn set_part(&mut self, category: Category, id: impl Into<String>) {
        self.selected_parts.insert(category, id.into());
    }

    pub(crate) fn clear_part(&mut self, category: Category) -> Option<String> {
        self.selected_parts.remove(&category)
    }

    /// Append an item unless it is already selected. Returns whether it was added.
    pub(crate) fn add_item(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.has_item(&id) {
            return false;
        }
        self.selected_items.push(id);
        true
    }

    /// Remove an item, keeping the order of the rest. Returns whether it was present.
    pub(crate) fn remove_item(&mut self, id: &str) -> bool {
        let before = self.selected_items.len();
        self.selected_items.retain(|i| i != id);
        self.selected_items.len() != before
    }
}
