//! Compatibility resolver: which parts of a category fit the configuration.
//!
//! Rules by category:
//! - `bodytype`, `head`: skin tone equals the configuration's (case-sensitive tokens)
//! - `hair`: hair color equals the configuration's, or the part names no color
//! - `clothes`, `accessoires`: part names the current body type, or names none
//!   (compared ignoring case, unlike the two rules above)
//!
//! [`filter_for_category`] is the lenient form shown to users: a rule that
//! would leave nothing is skipped and reported as a warning. The strict
//! helpers are used by the editor when it has to keep the configuration
//! consistent.

use tracing::warn;

use crate::catalog::Catalog;
use crate::configuration::Configuration;
use crate::inference::{
    has_no_body_type, has_no_hair_color, infer_body_type, infer_hair_color, infer_skin_tone,
};
use crate::models::{BodyType, Category, HairColor, Part, SkinTone, Warning};

/// Candidates for one category plus the rules that had to be dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered<'a> {
    /// Compatible parts in catalog order
    pub parts: Vec<&'a Part>,
    /// One warning per rule skipped because it matched nothing
    pub warnings: Vec<Warning>,
}

impl<'a> Filtered<'a> {
    /// True if every rule applied without falling back.
    pub fn is_exact(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.parts.iter().map(|p| p.id.as_str()).collect()
    }
}

/// Part carries the given skin tone.
pub fn matches_skin_tone(part: &Part, tone: SkinTone) -> bool {
    infer_skin_tone(part) == Some(tone)
}

/// Part has the given hair color, or is color-agnostic.
pub fn matches_hair_color(part: &Part, color: Option<HairColor>) -> bool {
    infer_hair_color(part) == color || has_no_hair_color(part)
}

/// Part is cut for the given body type, or for none in particular.
pub fn matches_body_type(part: &Part, body: BodyType) -> bool {
    part.mentions_ignore_case(body.token()) || has_no_body_type(part)
}

/// Body type the configuration's clothes have to fit.
pub fn effective_body_type(config: &Configuration, catalog: &Catalog) -> BodyType {
    infer_body_type(config, catalog).unwrap_or_default()
}

/// Strict check of one part against the rule for its category.
pub fn is_compatible(part: &Part, config: &Configuration, catalog: &Catalog) -> bool {
    match part.category {
        Category::Bodytype | Category::Head => matches_skin_tone(part, config.skin_tone()),
        Category::Hair => matches_hair_color(part, config.hair_color()),
        Category::Clothes | Category::Accessoires => {
            matches_body_type(part, effective_body_type(config, catalog))
        }
        _ => true,
    }
}

/// All parts of a category that satisfy its rule, with no fallback.
pub fn compatible_parts<'a>(
    category: Category,
    config: &Configuration,
    catalog: &'a Catalog,
) -> Vec<&'a Part> {
    catalog.in_category(category).filter(|p| is_compatible(p, config, catalog)).collect()
}

/// Parts of a category the user can pick, falling back rather than going empty.
///
/// If the category has any parts at all, the result is never empty.
pub fn filter_for_category<'a>(
    category: Category,
    config: &Configuration,
    catalog: &'a Catalog,
) -> Filtered<'a> {
    let mut warnings = Vec::new();
    let candidates: Vec<&Part> = catalog.in_category(category).collect();

    let parts = match category {
        Category::Bodytype | Category::Head => {
            let tone = config.skin_tone();
            apply_rule(category, candidates, &format!("skin tone {}", tone), &mut warnings, |p| {
                matches_skin_tone(p, tone)
            })
        }
        Category::Hair => {
            let color = config.hair_color();
            let label = match color {
                Some(c) => format!("hair color {}", c),
                None => "no hair color".to_string(),
            };
            apply_rule(category, candidates, &label, &mut warnings, |p| {
                matches_hair_color(p, color)
            })
        }
        Category::Clothes | Category::Accessoires => {
            let body = effective_body_type(config, catalog);
            apply_rule(category, candidates, &format!("body type {}", body), &mut warnings, |p| {
                matches_body_type(p, body)
            })
        }
        _ => candidates,
    };

    Filtered { parts, warnings }
}

fn apply_rule<'a>(
    category: Category,
    candidates: Vec<&'a Part>,
    label: &str,
    warnings: &mut Vec<Warning>,
    keep: impl Fn(&Part) -> bool,
) -> Vec<&'a Part> {
    let kept: Vec<&Part> = candidates.iter().copied().filter(|p| keep(p)).collect();
    if kept.is_empty() && !candidates.is_empty() {
        warn!(%category, rule = label, "no compatible parts, showing all {} candidates", candidates.len());
        warnings.push(Warning::new(format!(
            "No {} parts match {}; showing all {} parts",
            category,
            label,
            candidates.len()
        )));
        return candidates;
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HairChoice;
    use crate::testing::sample_catalog;

    fn config_with(
        tone: SkinTone,
        hair: HairChoice,
        body: Option<&str>,
    ) -> Configuration {
        let mut config = Configuration::new();
        config.skin_tone = tone;
        config.hair = hair;
        if let Some(id) = body {
            config.set_part(Category::Bodytype, id);
        }
        config
    }

    #[test]
    fn test_filter_bodytype_by_tone() {
        let catalog = sample_catalog();
        let config = config_with(SkinTone::Braun, HairChoice::Unset, None);
        let filtered = filter_for_category(Category::Bodytype, &config, &catalog);
        assert!(filtered.is_exact());
        assert_eq!(filtered.ids(), vec!["bodytype_braun_eckig", "bodytype_braun_breit"]);
    }

    #[test]
    fn test_filter_head_by_tone() {
        let catalog = sample_catalog();
        let config = config_with(SkinTone::Dunkel, HairChoice::Unset, None);
        let filtered = filter_for_category(Category::Head, &config, &catalog);
        assert_eq!(filtered.ids(), vec!["head_dunkel_oval"]);
    }

    #[test]
    fn test_filter_hair_keeps_color_agnostic() {
        let catalog = sample_catalog();
        let config = config_with(SkinTone::Hell, HairChoice::Color(HairColor::Black), None);
        let filtered = filter_for_category(Category::Hair, &config, &catalog);
        assert_eq!(filtered.ids(), vec!["hair_black_kraus", "hair_black_bob", "hair_cap"]);
    }

    #[test]
    fn test_filter_hair_without_color() {
        let catalog = sample_catalog();
        let config = config_with(SkinTone::Hell, HairChoice::Bald, None);
        let filtered = filter_for_category(Category::Hair, &config, &catalog);
        assert_eq!(filtered.ids(), vec!["hair_cap"]);
    }

    #[test]
    fn test_filter_clothes_by_body_type() {
        let catalog = sample_catalog();
        let config = config_with(SkinTone::Hell, HairChoice::Unset, Some("bodytype_hell_breit"));
        let clothes = filter_for_category(Category::Clothes, &config, &catalog);
        assert_eq!(clothes.ids(), vec!["clothes_shirt_breit", "clothes_scarf"]);

        // lower-case "breit" in the id still matches
        let acc = filter_for_category(Category::Accessoires, &config, &catalog);
        assert_eq!(acc.ids(), vec!["accessoires_bag_breit", "accessoires_watch"]);
    }

    #[test]
    fn test_filter_clothes_defaults_to_normal() {
        let catalog = sample_catalog();
        let config = config_with(SkinTone::Hell, HairChoice::Unset, Some("bodytype_hell_eckig"));
        let clothes = filter_for_category(Category::Clothes, &config, &catalog);
        assert_eq!(clothes.ids(), vec!["clothes_shirt_normal", "clothes_scarf"]);
    }

    #[test]
    fn test_filter_falls_back_when_empty() {
        let catalog = Catalog::from_parts(vec![
            Part::new("head_hell_a", Category::Head, "Hell_a.png"),
            Part::new("head_hell_b", Category::Head, "Hell_b.png"),
        ]);
        let config = config_with(SkinTone::Dunkel, HairChoice::Unset, None);
        let filtered = filter_for_category(Category::Head, &config, &catalog);
        assert_eq!(filtered.ids(), vec!["head_hell_a", "head_hell_b"]);
        assert_eq!(filtered.warnings.len(), 1);
        assert!(filtered.warnings[0].message.contains("skin tone Dunkel"));

        assert!(compatible_parts(Category::Head, &config, &catalog).is_empty());
    }

    #[test]
    fn test_filter_never_empty_if_category_has_parts() {
        let catalog = sample_catalog();
        for tone in SkinTone::ALL {
            for hair in [HairChoice::Unset, HairChoice::Bald, HairChoice::Color(HairColor::White)] {
                let config = config_with(tone, hair, Some("bodytype_dunkel_rund"));
                for category in Category::ALL {
                    let has_parts = catalog.in_category(category).next().is_some();
                    let filtered = filter_for_category(category, &config, &catalog);
                    assert_eq!(!filtered.parts.is_empty(), has_parts, "{}", category);
                }
            }
        }
    }

    #[test]
    fn test_filter_empty_catalog() {
        let catalog = Catalog::new();
        let filtered = filter_for_category(Category::Hair, &Configuration::new(), &catalog);
        assert!(filtered.parts.is_empty());
        assert!(filtered.is_exact());
    }

    #[test]
    fn test_unfiltered_categories_pass_through() {
        let catalog = sample_catalog();
        let config = Configuration::new();
        let filtered = filter_for_category(Category::Shoes, &config, &catalog);
        assert_eq!(filtered.ids(), vec!["shoes_boots", "shoes_sneaker"]);
    }
}
