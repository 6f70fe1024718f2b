//! Random avatar generation.
//!
//! Candidates are drawn with strict compatibility, so a category with no
//! fitting part stays unselected instead of borrowing an incompatible one.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use super::reconcile::sync_breast_part;
use crate::catalog::Catalog;
use crate::configuration::Configuration;
use crate::models::{Category, HairChoice, HairColor, SkinTone};
use crate::resolver::compatible_parts;

/// Chance that a random avatar is bald, regardless of the hair drawn.
pub const BALD_CHANCE: f64 = 0.2;

/// Upper bound (inclusive) on multi-select items across all categories.
pub const MAX_RANDOM_ITEMS: usize = 4;

/// Chance that the breast option is enabled.
pub const BREAST_OPTION_CHANCE: f64 = 0.5;

/// Single-select categories drawn after body, head and hair.
const OTHER_SINGLES: [Category; 3] = [Category::Shoes, Category::Values, Category::Strengths];

/// Multi-select categories, in draw order.
const MULTI_CATEGORIES: [Category; 4] =
    [Category::Clothes, Category::Face, Category::Handicap, Category::Accessoires];

/// Produce a wholly new configuration.
///
/// The body is drawn before clothes so that clothes fit it; the item count is
/// drawn once for all multi-select categories combined.
pub fn generate_random<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Configuration {
    let mut config = Configuration::new();
    config.skin_tone = SkinTone::ALL.choose(rng).copied().unwrap_or_default();

    pick_single(&mut config, catalog, Category::Bodytype, rng);
    pick_single(&mut config, catalog, Category::Head, rng);

    if let Some(&color) = HairColor::ALL.choose(rng) {
        config.hair = HairChoice::Color(color);
    }
    pick_single(&mut config, catalog, Category::Hair, rng);
    if rng.random_bool(BALD_CHANCE) {
        config.hair = HairChoice::Bald;
        config.clear_part(Category::Hair);
    }

    for category in OTHER_SINGLES {
        pick_single(&mut config, catalog, category, rng);
    }

    let count = rng.random_range(0..=MAX_RANDOM_ITEMS);
    let pool: Vec<_> = MULTI_CATEGORIES
        .into_iter()
        .flat_map(|category| compatible_parts(category, &config, catalog))
        .collect();
    let picked: Vec<String> = pool.choose_multiple(rng, count).map(|p| p.id.clone()).collect();
    for id in picked {
        config.add_item(id);
    }

    config.breast_option = rng.random_bool(BREAST_OPTION_CHANCE);
    sync_breast_part(&mut config, catalog);

    debug!(
        skin_tone = %config.skin_tone(),
        parts = config.selected_parts().len(),
        items = config.selected_items().len(),
        "generated random configuration"
    );
    config
}

fn pick_single<R: Rng + ?Sized>(
    config: &mut Configuration,
    catalog: &Catalog,
    category: Category,
    rng: &mut R,
) {
    let candidates = compatible_parts(category, config, catalog);
    if let Some(part) = candidates.choose(rng) {
        config.set_part(category, part.id.clone());
    }
}
