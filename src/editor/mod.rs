//! The configuration editor: the only way to change a [`Configuration`].
//!
//! Every operation builds the next configuration on a working copy, runs the
//! reconciliation rules from [`reconcile`] on it and commits the result in a
//! single assignment. Mutations take `&mut self`, so two operations can never
//! interleave on the same editor.
//!
//! ```
//! use avatarkit::catalog::Catalog;
//! use avatarkit::editor::AvatarEditor;
//! use avatarkit::models::{Category, Part, SkinTone};
//!
//! let catalog = Catalog::from_parts(vec![
//!     Part::new("bodytype_hell_eckig", Category::Bodytype, "bodytype/Hell_Eckig.png"),
//!     Part::new("bodytype_braun_eckig", Category::Bodytype, "bodytype/Braun_Eckig.png"),
//! ]);
//! let mut editor = AvatarEditor::new(&catalog);
//! editor.select_by_id("bodytype_hell_eckig");
//! editor.set_skin_tone(SkinTone::Braun);
//! assert_eq!(
//!     editor.configuration().selected_part(Category::Bodytype),
//!     Some("bodytype_braun_eckig")
//! );
//! ```

pub mod random;
pub mod reconcile;

use rand::Rng;
use tracing::debug;

use crate::catalog::Catalog;
use crate::codec::{self, DecodeError};
use crate::compositor::resolve_draw_sequence;
use crate::configuration::Configuration;
use crate::models::{Category, HairChoice, HairColor, Part, SkinTone};
use crate::resolver::{filter_for_category, Filtered};

pub use random::generate_random;

/// Edits one configuration against a fixed catalog.
#[derive(Debug, Clone)]
pub struct AvatarEditor<'c> {
    catalog: &'c Catalog,
    config: Configuration,
}

impl<'c> AvatarEditor<'c> {
    /// Editor over a fresh default configuration.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_configuration(catalog, Configuration::new())
    }

    /// Editor over an existing configuration, e.g. a restored snapshot.
    pub fn with_configuration(catalog: &'c Catalog, config: Configuration) -> Self {
        Self { catalog, config }
    }

    /// Editor over a freshly generated random configuration.
    pub fn random<R: Rng + ?Sized>(catalog: &'c Catalog, rng: &mut R) -> Self {
        Self::with_configuration(catalog, generate_random(catalog, rng))
    }

    /// Editor over the configuration a share token describes.
    pub fn from_token(catalog: &'c Catalog, token: &str) -> Result<Self, DecodeError> {
        Ok(Self::with_configuration(catalog, codec::decode(token)?))
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn into_configuration(self) -> Configuration {
        self.config
    }

    /// Share token for the current configuration.
    pub fn token(&self) -> String {
        codec::encode(&self.config)
    }

    /// Parts the user can currently pick in a category.
    pub fn candidates(&self, category: Category) -> Filtered<'c> {
        filter_for_category(category, &self.config, self.catalog)
    }

    /// Parts to paint, back to front.
    pub fn draw_sequence(&self) -> Vec<&'c Part> {
        resolve_draw_sequence(&self.config, self.catalog)
    }

    fn commit(&mut self, op: impl FnOnce(&mut Configuration, &Catalog)) {
        let mut next = self.config.clone();
        op(&mut next, self.catalog);
        self.config = next;
    }

    /// Pick a part.
    ///
    /// Single-select categories are overwritten; multi-select parts are added
    /// if absent. Head and body pull the skin tone and each other along, a new
    /// body drops clothes that no longer fit, and a colored hair part sets the
    /// hair color.
    pub fn select_part(&mut self, part: &Part) {
        self.commit(|config, catalog| {
            let category = part.category;
            if category.is_multi() {
                config.add_item(part.id.clone());
                return;
            }

            config.set_part(category, part.id.clone());
            match category {
                Category::Bodytype | Category::Head => {
                    reconcile::align_tone_partner(config, catalog, part);
                    reconcile::purge_incompatible_items(config, catalog);
                }
                Category::Hair => reconcile::adopt_hair_color(config, part),
                Category::Brust => config.breast_option = true,
                _ => {}
            }
        });
    }

    /// Pick a part by id. Unknown ids change nothing and return `false`.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.catalog.part(id) {
            Some(part) => {
                self.select_part(part);
                true
            }
            None => {
                debug!(id, "select ignored, part not in catalog");
                false
            }
        }
    }

    /// Clear a category.
    ///
    /// Clearing `hair` keeps the hair color (unlike [`Self::remove_hair`]);
    /// clearing `brust` turns the breast option off; clearing the body falls
    /// back to the `Normal` body type and drops clothes that no longer fit.
    /// For multi-select categories every selected item of that category is
    /// removed.
    pub fn deselect(&mut self, category: Category) {
        self.commit(|config, catalog| {
            if category.is_multi() {
                let ids: Vec<String> = config
                    .selected_items()
                    .iter()
                    .filter(|id| catalog.part(id).is_some_and(|p| p.category == category))
                    .cloned()
                    .collect();
                for id in &ids {
                    config.remove_item(id);
                }
                return;
            }

            config.clear_part(category);
            match category {
                Category::Bodytype => {
                    reconcile::purge_incompatible_items(config, catalog);
                }
                Category::Brust => config.breast_option = false,
                _ => {}
            }
        });
    }

    /// Add a multi-select part if absent, else remove it.
    ///
    /// For a single-select part this selects it, or clears the category when
    /// it is the current selection.
    pub fn toggle_item(&mut self, part: &Part) {
        if part.category.is_single() {
            if self.config.selected_part(part.category) == Some(part.id.as_str()) {
                self.deselect(part.category);
            } else {
                self.select_part(part);
            }
            return;
        }

        self.commit(|config, _| {
            if !config.remove_item(&part.id) {
                config.add_item(part.id.clone());
            }
        });
    }

    /// Toggle by id. Unknown ids change nothing and return `false`.
    pub fn toggle_by_id(&mut self, id: &str) -> bool {
        match self.catalog.part(id) {
            Some(part) => {
                self.toggle_item(part);
                true
            }
            None => {
                debug!(id, "toggle ignored, part not in catalog");
                false
            }
        }
    }

    /// Change the skin tone and move head and body to matching parts.
    pub fn set_skin_tone(&mut self, tone: SkinTone) {
        self.commit(|config, catalog| {
            config.skin_tone = tone;
            reconcile::retone_category(config, catalog, Category::Bodytype);
            reconcile::retone_category(config, catalog, Category::Head);
            reconcile::purge_incompatible_items(config, catalog);
        });
    }

    /// Change the hair color and restyle the hair to match.
    pub fn set_hair_color(&mut self, color: HairColor) {
        self.commit(|config, catalog| {
            config.hair = HairChoice::Color(color);
            reconcile::restyle_hair(config, catalog);
        });
    }

    /// Go bald: no hair part and no hair color.
    pub fn remove_hair(&mut self) {
        self.commit(|config, _| {
            config.clear_part(Category::Hair);
            config.hair = HairChoice::Bald;
        });
    }

    /// Set the breast option and keep the `brust` selection in step.
    pub fn set_breast_option(&mut self, enabled: bool) {
        self.commit(|config, catalog| {
            config.breast_option = enabled;
            reconcile::sync_breast_part(config, catalog);
        });
    }

    /// Replace the configuration with a random one.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.config = generate_random(self.catalog, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::is_compatible;
    use crate::testing::{part, sample_catalog};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_set_skin_tone_keeps_shape() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("bodytype_hell_eckig");
        assert_eq!(editor.configuration().skin_tone(), SkinTone::Hell);

        editor.set_skin_tone(SkinTone::Braun);
        let config = editor.configuration();
        assert_eq!(config.skin_tone(), SkinTone::Braun);
        assert_eq!(config.selected_part(Category::Bodytype), Some("bodytype_braun_eckig"));
    }

    #[test]
    fn test_set_skin_tone_mutual_consistency() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("bodytype_hell_breit");
        editor.select_by_id("head_hell_oval");

        for tone in [SkinTone::Dunkel, SkinTone::Braun, SkinTone::Hell] {
            editor.set_skin_tone(tone);
            let config = editor.configuration();
            for category in [Category::Bodytype, Category::Head] {
                let id = config.selected_part(category).unwrap();
                assert!(is_compatible(part(&catalog, id), config, &catalog), "{} for {}", id, tone);
            }
        }
    }

    #[test]
    fn test_set_skin_tone_leaves_unselected_alone() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.set_skin_tone(SkinTone::Dunkel);
        assert!(editor.configuration().selected_parts().is_empty());
    }

    #[test]
    fn test_set_skin_tone_drops_items_for_new_body() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("bodytype_hell_breit");
        editor.select_by_id("clothes_shirt_breit");
        editor.select_by_id("clothes_scarf");

        // Dunkel has only a Rund body, which is not Breit
        editor.set_skin_tone(SkinTone::Dunkel);
        let config = editor.configuration();
        assert_eq!(config.selected_part(Category::Bodytype), Some("bodytype_dunkel_rund"));
        assert_eq!(config.selected_items(), ["clothes_scarf"]);
    }

    #[test]
    fn test_select_body_retones_head() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("head_hell_eckig");
        editor.select_by_id("bodytype_braun_eckig");

        let config = editor.configuration();
        assert_eq!(config.skin_tone(), SkinTone::Braun);
        assert_eq!(config.selected_part(Category::Head), Some("head_braun_eckig"));
    }

    #[test]
    fn test_select_head_retones_body() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("bodytype_hell_breit");
        editor.select_by_id("head_dunkel_oval");

        let config = editor.configuration();
        assert_eq!(config.skin_tone(), SkinTone::Dunkel);
        assert_eq!(config.selected_part(Category::Bodytype), Some("bodytype_dunkel_rund"));
    }

    #[test]
    fn test_select_body_purges_clothes() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("bodytype_hell_breit");
        editor.select_by_id("clothes_shirt_breit");
        editor.select_by_id("accessoires_bag_breit");
        editor.select_by_id("face_glasses");

        editor.select_by_id("bodytype_hell_eckig");
        assert_eq!(editor.configuration().selected_items(), ["face_glasses"]);
    }

    #[test]
    fn test_select_multi_adds_once() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("face_glasses");
        editor.select_by_id("face_glasses");
        assert_eq!(editor.configuration().selected_items(), ["face_glasses"]);
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        let before = editor.configuration().clone();
        assert!(!editor.select_by_id("nope"));
        assert!(!editor.toggle_by_id("nope"));
        assert_eq!(editor.configuration(), &before);
    }

    #[test]
    fn test_select_hair_adopts_color() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("hair_red_bob");
        assert_eq!(editor.configuration().hair(), HairChoice::Color(HairColor::Red));

        editor.remove_hair();
        editor.select_by_id("hair_cap");
        assert_eq!(editor.configuration().hair(), HairChoice::Unset);
    }

    #[test]
    fn test_set_hair_color_keeps_style() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("hair_black_kraus");
        editor.set_hair_color(HairColor::Blonde);
        assert_eq!(editor.configuration().selected_part(Category::Hair), Some("hair_blonde_kraus"));

        editor.set_hair_color(HairColor::Red);
        assert_eq!(editor.configuration().selected_part(Category::Hair), Some("hair_red_bob"));
    }

    #[test]
    fn test_set_hair_color_picks_default_when_bald() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.remove_hair();
        editor.set_hair_color(HairColor::Black);
        let config = editor.configuration();
        assert_eq!(config.hair(), HairChoice::Color(HairColor::Black));
        assert_eq!(config.selected_part(Category::Hair), Some("hair_black_kraus"));
    }

    #[test]
    fn test_remove_hair() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("hair_black_kraus");
        assert_eq!(editor.configuration().hair_color(), Some(HairColor::Black));

        editor.remove_hair();
        let config = editor.configuration();
        assert_eq!(config.selected_part(Category::Hair), None);
        assert_eq!(config.hair_color(), None);
        assert_eq!(config.hair(), HairChoice::Bald);
        assert_ne!(config, &Configuration::new());

        let restored = AvatarEditor::from_token(&catalog, &editor.token()).unwrap();
        assert_eq!(restored.configuration().hair(), HairChoice::Bald);
    }

    #[test]
    fn test_deselect_hair_keeps_color() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("hair_black_bob");
        editor.deselect(Category::Hair);
        let config = editor.configuration();
        assert_eq!(config.selected_part(Category::Hair), None);
        assert_eq!(config.hair(), HairChoice::Color(HairColor::Black));
    }

    #[test]
    fn test_deselect_body_purges_clothes() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("bodytype_hell_breit");
        editor.select_by_id("clothes_shirt_breit");
        editor.select_by_id("clothes_scarf");

        editor.deselect(Category::Bodytype);
        assert_eq!(editor.configuration().selected_items(), ["clothes_scarf"]);
    }

    #[test]
    fn test_deselect_multi_category() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        for id in ["face_glasses", "clothes_scarf", "face_freckles"] {
            editor.select_by_id(id);
        }
        editor.deselect(Category::Face);
        assert_eq!(editor.configuration().selected_items(), ["clothes_scarf"]);
    }

    #[test]
    fn test_toggle_twice_restores_items() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("face_glasses");
        let before = editor.configuration().clone();

        let scarf = part(&catalog, "clothes_scarf");
        editor.toggle_item(scarf);
        assert!(editor.configuration().has_item("clothes_scarf"));
        editor.toggle_item(scarf);
        assert_eq!(editor.configuration(), &before);
    }

    #[test]
    fn test_toggle_single_select_part() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        let boots = part(&catalog, "shoes_boots");
        editor.toggle_item(boots);
        assert_eq!(editor.configuration().selected_part(Category::Shoes), Some("shoes_boots"));
        editor.toggle_item(boots);
        assert_eq!(editor.configuration().selected_part(Category::Shoes), None);
        assert!(editor.configuration().selected_items().is_empty());
    }

    #[test]
    fn test_breast_option() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.set_breast_option(true);
        assert_eq!(editor.configuration().selected_part(Category::Brust), Some("brust_option"));

        editor.deselect(Category::Brust);
        assert!(!editor.configuration().breast_option());

        editor.select_by_id("brust_option");
        assert!(editor.configuration().breast_option());

        editor.set_breast_option(false);
        assert_eq!(editor.configuration().selected_part(Category::Brust), None);
    }

    #[test]
    fn test_breast_option_without_part() {
        let catalog = Catalog::new();
        let mut editor = AvatarEditor::new(&catalog);
        editor.set_breast_option(true);
        assert!(editor.configuration().breast_option());
        assert_eq!(editor.configuration().selected_part(Category::Brust), None);
    }

    #[test]
    fn test_candidates_and_draw_sequence() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.set_skin_tone(SkinTone::Dunkel);
        assert_eq!(editor.candidates(Category::Head).ids(), vec!["head_dunkel_oval"]);

        editor.select_by_id("face_glasses");
        editor.select_by_id("head_dunkel_oval");
        let ids: Vec<&str> = editor.draw_sequence().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["head_dunkel_oval", "face_glasses"]);
    }

    #[test]
    fn test_randomize_replaces_configuration() {
        let catalog = sample_catalog();
        let mut editor = AvatarEditor::new(&catalog);
        editor.select_by_id("face_glasses");
        editor.randomize(&mut ChaCha8Rng::seed_from_u64(9));

        let expected = generate_random(&catalog, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(editor.configuration(), &expected);
        assert_eq!(
            AvatarEditor::random(&catalog, &mut ChaCha8Rng::seed_from_u64(9)).configuration(),
            &expected
        );
    }

    #[test]
    fn test_from_token_rejects_garbage() {
        let catalog = sample_catalog();
        assert!(AvatarEditor::from_token(&catalog, "not a token").is_err());
    }
}
