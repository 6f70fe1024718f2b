//! Layer compositor: the back-to-front draw sequence of a configuration.
//!
//! The compositor decides which parts are painted and in which order. The
//! painting itself belongs to a [`DrawLayer`] supplied by the caller;
//! [`ImageCanvas`] is the `image`-backed one used by the CLI.

mod blend;
mod canvas;

use tracing::debug;

use crate::catalog::Catalog;
use crate::configuration::Configuration;
use crate::models::{Category, Part};

pub use canvas::ImageCanvas;

/// Category paint order, back to front.
pub const DRAW_ORDER: [Category; 11] = [
    Category::Bodytype,
    Category::Shoes,
    Category::Clothes,
    Category::Head,
    Category::Face,
    Category::Hair,
    Category::Handicap,
    Category::Brust,
    Category::Accessoires,
    Category::Values,
    Category::Strengths,
];

/// Something that can paint one part over the full frame.
///
/// Implementations swallow their own failures; the compositor never sees them.
pub trait DrawLayer {
    fn draw(&mut self, part: &Part);
}

/// Parts to paint for a configuration, back to front.
///
/// Single-select categories contribute their selected part, multi-select
/// categories their items in selection order. Ids missing from the catalog,
/// or naming a part of a different category, are skipped. Pure: same inputs,
/// same sequence.
pub fn resolve_draw_sequence<'a>(config: &Configuration, catalog: &'a Catalog) -> Vec<&'a Part> {
    let mut sequence = Vec::new();
    for category in DRAW_ORDER {
        if category.is_single() {
            if let Some(id) = config.selected_part(category) {
                match catalog.part(id) {
                    Some(part) if part.category == category => sequence.push(part),
                    Some(part) => debug!(
                        %category,
                        id,
                        actual = %part.category,
                        "skipping selection from another category"
                    ),
                    None => debug!(%category, id, "skipping dangling selection"),
                }
            }
            continue;
        }

        for id in config.selected_items() {
            match catalog.part(id) {
                Some(part) if part.category == category => sequence.push(part),
                Some(_) => {}
                // reported once, under the first multi-select category
                None if category == Category::Clothes => debug!(id, "skipping dangling item"),
                None => {}
            }
        }
    }
    sequence
}

/// Paint a configuration with `painter`, one `draw` call per layer, in order.
///
/// Returns the number of layers handed to the painter.
pub fn composite<D: DrawLayer + ?Sized>(
    config: &Configuration,
    catalog: &Catalog,
    painter: &mut D,
) -> usize {
    let sequence = resolve_draw_sequence(config, catalog);
    for part in &sequence {
        painter.draw(part);
    }
    sequence.len()
}
