//! Cross-field reconciliation rules.
//!
//! Each rule takes the configuration being built and restores one invariant:
//! - `retone_category`: a head/body selection carries the configuration's skin tone
//! - `align_tone_partner`: after a head or body pick, the other one follows its tone
//! - `purge_incompatible_items`: clothes and accessories fit the body type
//! - `restyle_hair`: the hair selection fits the hair color
//! - `adopt_hair_color`: the hair color follows an explicitly picked hair part
//! - `sync_breast_part`: the `brust` selection follows the breast option flag
//!
//! Rules only touch the configuration passed in; the editor runs them on a
//! working copy and commits the result.

use tracing::debug;

use crate::catalog::Catalog;
use crate::configuration::Configuration;
use crate::inference::{hair_style, infer_body_shape, infer_hair_color, infer_skin_tone};
use crate::models::{Category, HairChoice, HairColor, Part};
use crate::resolver::{
    compatible_parts, effective_body_type, matches_body_type, matches_hair_color, matches_skin_tone,
};

/// Pick a replacement for `previous`: same body shape if any candidate has it,
/// else the first candidate.
pub fn best_match<'a>(previous: Option<&Part>, candidates: &[&'a Part]) -> Option<&'a Part> {
    let shape = previous.and_then(infer_body_shape);
    shape
        .and_then(|shape| candidates.iter().copied().find(|p| infer_body_shape(p) == Some(shape)))
        .or_else(|| candidates.first().copied())
}

/// Reassign a selected head or body to a part with the configuration's skin tone.
///
/// Unselected categories stay unselected. When no part has the tone the
/// selection is cleared. Returns whether the selection changed.
pub fn retone_category(config: &mut Configuration, catalog: &Catalog, category: Category) -> bool {
    let Some(current_id) = config.selected_part(category).map(str::to_owned) else {
        return false;
    };
    let tone = config.skin_tone();
    let previous = catalog.part(&current_id);
    if previous.is_some_and(|p| matches_skin_tone(p, tone)) {
        return false;
    }

    let candidates = compatible_parts(category, config, catalog);
    match best_match(previous, &candidates) {
        Some(part) => {
            debug!(%category, from = %current_id, to = %part.id, %tone, "retoned selection");
            config.set_part(category, part.id.clone());
        }
        None => {
            debug!(%category, from = %current_id, %tone, "no part with this skin tone, clearing");
            config.clear_part(category);
        }
    }
    true
}

/// The other skin-tone category of a head/body pair.
pub fn tone_partner(category: Category) -> Option<Category> {
    match category {
        Category::Bodytype => Some(Category::Head),
        Category::Head => Some(Category::Bodytype),
        _ => None,
    }
}

/// After `part` was placed into head or body: adopt its skin tone and retone
/// the partner category. Returns whether the skin tone changed.
pub fn align_tone_partner(config: &mut Configuration, catalog: &Catalog, part: &Part) -> bool {
    let Some(partner) = tone_partner(part.category) else {
        return false;
    };
    let Some(tone) = infer_skin_tone(part) else {
        return false;
    };
    if tone == config.skin_tone() {
        return false;
    }
    config.skin_tone = tone;
    retone_category(config, catalog, partner);
    true
}

/// Drop selected clothes and accessories that do not fit the body type.
///
/// Dangling ids are left alone; they are skipped when drawing. Returns the
/// removed ids in selection order.
pub fn purge_incompatible_items(config: &mut Configuration, catalog: &Catalog) -> Vec<String> {
    let body = effective_body_type(config, catalog);
    let removed: Vec<String> = config
        .selected_items()
        .iter()
        .filter(|id| {
            catalog
                .part(id)
                .is_some_and(|p| p.category.follows_body_type() && !matches_body_type(p, body))
        })
        .cloned()
        .collect();

    for id in &removed {
        config.remove_item(id);
    }
    if !removed.is_empty() {
        debug!(%body, removed = ?removed, "removed items that do not fit the body type");
    }
    removed
}

/// Preferred hair among compatible parts: exact color first, then color-agnostic.
fn preferred_hair<'a>(compatible: &[&'a Part], color: Option<HairColor>) -> Option<&'a Part> {
    compatible
        .iter()
        .copied()
        .find(|p| color.is_some() && infer_hair_color(p) == color)
        .or_else(|| compatible.first().copied())
}

/// Make the hair selection fit the configuration's hair color.
///
/// A selected hair keeps its style in the new color when such a part exists,
/// else the first compatible part is used, else the hair is cleared. With no
/// hair selected, a default compatible part is picked. Returns whether the
/// selection changed.
pub fn restyle_hair(config: &mut Configuration, catalog: &Catalog) -> bool {
    let color = config.hair_color();
    let current = config.selected_part(Category::Hair).and_then(|id| catalog.part(id));
    if current.is_some_and(|p| matches_hair_color(p, color)) {
        return false;
    }

    let compatible = compatible_parts(Category::Hair, config, catalog);
    let replacement = match current {
        Some(previous) => {
            let style = hair_style(previous);
            compatible
                .iter()
                .copied()
                .find(|p| infer_hair_color(p) == color && hair_style(p) == style)
                .or_else(|| preferred_hair(&compatible, color))
        }
        None => preferred_hair(&compatible, color),
    };

    let before = config.selected_part(Category::Hair).map(str::to_owned);
    match replacement {
        Some(part) => config.set_part(Category::Hair, part.id.clone()),
        None => {
            config.clear_part(Category::Hair);
        }
    }
    let after = config.selected_part(Category::Hair).map(str::to_owned);
    if before != after {
        debug!(from = ?before, to = ?after, "restyled hair");
    }
    before != after
}

/// Let the hair color follow a hair part that was picked directly.
///
/// A colored part sets its color. A color-agnostic part keeps a chosen color
/// and lifts the bald state.
pub fn adopt_hair_color(config: &mut Configuration, part: &Part) {
    match infer_hair_color(part) {
        Some(color) => config.hair = HairChoice::Color(color),
        None if config.hair.is_bald() => config.hair = HairChoice::Unset,
        None => {}
    }
}

/// Keep the `brust` selection in step with the breast option flag.
///
/// Enabling with no `brust` part in the catalog leaves the selection empty.
pub fn sync_breast_part(config: &mut Configuration, catalog: &Catalog) {
    if !config.breast_option() {
        config.clear_part(Category::Brust);
        return;
    }
    match catalog.first_in(Category::Brust) {
        Some(part) => config.set_part(Category::Brust, part.id.clone()),
        None => {
            debug!("breast option enabled but the catalog has no brust part");
            config.clear_part(Category::Brust);
        }
    }
}
