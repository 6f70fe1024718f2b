//! Attribute inference from part ids and source paths.
//!
//! Parts do not carry typed attributes; skin tone, hair color and body shape
//! are derived on demand by substring matching against fixed vocabularies.
//! All functions here are pure and never cache into the part.
//!
//! Token tests look at `id` and `src`. Within a vocabulary the first token in
//! canonical order that appears anywhere wins.

use crate::catalog::Catalog;
use crate::configuration::Configuration;
use crate::models::{BodyShape, BodyType, Category, HairColor, Part, SkinTone};

/// Skin tone named by the part, matched case-sensitively.
pub fn infer_skin_tone(part: &Part) -> Option<SkinTone> {
    SkinTone::ALL.into_iter().find(|tone| part.mentions(tone.token()))
}

/// Hair color named by the part, matched case-sensitively.
pub fn infer_hair_color(part: &Part) -> Option<HairColor> {
    HairColor::ALL.into_iter().find(|color| part.mentions(color.token()))
}

/// Silhouette shape named by the part, matched case-sensitively.
pub fn infer_body_shape(part: &Part) -> Option<BodyShape> {
    BodyShape::ALL.into_iter().find(|shape| part.mentions(shape.token()))
}

/// Body type named by a body part, matched case-sensitively.
pub fn body_type_of(part: &Part) -> Option<BodyType> {
    BodyType::ALL.into_iter().find(|body| part.mentions(body.token()))
}

/// Body type of the currently selected `bodytype` part.
///
/// `None` when no body is selected, the selection dangles, or the part names
/// no body type. Callers treat `None` as [`BodyType::Normal`].
pub fn infer_body_type(config: &Configuration, catalog: &Catalog) -> Option<BodyType> {
    config
        .selected_part(Category::Bodytype)
        .and_then(|id| catalog.part(id))
        .and_then(body_type_of)
}

/// True when the part names no hair color at all (e.g. a cap).
pub fn has_no_hair_color(part: &Part) -> bool {
    infer_hair_color(part).is_none()
}

/// True when the part names no body type, ignoring case.
pub fn has_no_body_type(part: &Part) -> bool {
    !BodyType::ALL.into_iter().any(|body| part.mentions_ignore_case(body.token()))
}

/// Hair style: the id with every hair-color token removed.
///
/// `hair_black_kraus` and `hair_blonde_kraus` share the style `hair__kraus`.
pub fn hair_style(part: &Part) -> String {
    HairColor::ALL
        .into_iter()
        .fold(part.id.clone(), |id, color| id.replace(color.token(), ""))
}
