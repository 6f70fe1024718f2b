//! Semantic attributes inferred from part names.
//!
//! Each enum's `ALL` array is the canonical token order: when several tokens
//! match a part, the earliest entry wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Skin tone of head and body parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SkinTone {
    #[default]
    Hell,
    Braun,
    Dunkel,
}

impl SkinTone {
    pub const ALL: [SkinTone; 3] = [SkinTone::Hell, SkinTone::Braun, SkinTone::Dunkel];

    /// Canonical token, matched case-sensitively.
    pub fn token(self) -> &'static str {
        match self {
            SkinTone::Hell => "Hell",
            SkinTone::Braun => "Braun",
            SkinTone::Dunkel => "Dunkel",
        }
    }

    pub fn from_str(s: &str) -> Option<SkinTone> {
        SkinTone::ALL.into_iter().find(|t| t.token() == s)
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Hair color of hair parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    Black,
    Blonde,
    Brunette,
    Red,
    White,
}

impl HairColor {
    pub const ALL: [HairColor; 5] =
        [HairColor::Black, HairColor::Blonde, HairColor::Brunette, HairColor::Red, HairColor::White];

    pub fn token(self) -> &'static str {
        match self {
            HairColor::Black => "black",
            HairColor::Blonde => "blonde",
            HairColor::Brunette => "brunette",
            HairColor::Red => "red",
            HairColor::White => "white",
        }
    }

    pub fn from_str(s: &str) -> Option<HairColor> {
        HairColor::ALL.into_iter().find(|c| c.token() == s)
    }
}

impl fmt::Display for HairColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Hair state of a configuration.
///
/// `Unset` and `Bald` both mean "no color", but only `Bald` records that the
/// hair was explicitly removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairChoice {
    #[default]
    Unset,
    Bald,
    Color(HairColor),
}

impl HairChoice {
    pub fn color(self) -> Option<HairColor> {
        match self {
            HairChoice::Color(color) => Some(color),
            HairChoice::Unset | HairChoice::Bald => None,
        }
    }

    pub fn is_bald(self) -> bool {
        self == HairChoice::Bald
    }

    /// Compact form used by share tokens: `""`, `"bald"` or a color token.
    pub fn as_token(self) -> &'static str {
        match self {
            HairChoice::Unset => "",
            HairChoice::Bald => "bald",
            HairChoice::Color(color) => color.token(),
        }
    }

    pub fn from_token(s: &str) -> Option<HairChoice> {
        match s {
            "" => Some(HairChoice::Unset),
            "bald" => Some(HairChoice::Bald),
            other => HairColor::from_str(other).map(HairChoice::Color),
        }
    }
}

/// Silhouette shape shared by matching head and body parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyShape {
    Breit,
    Eng,
    Normal,
    Oval,
    Rund,
    Eckig,
}

impl BodyShape {
    pub const ALL: [BodyShape; 6] = [
        BodyShape::Breit,
        BodyShape::Eng,
        BodyShape::Normal,
        BodyShape::Oval,
        BodyShape::Rund,
        BodyShape::Eckig,
    ];

    pub fn token(self) -> &'static str {
        match self {
            BodyShape::Breit => "Breit",
            BodyShape::Eng => "Eng",
            BodyShape::Normal => "Normal",
            BodyShape::Oval => "Oval",
            BodyShape::Rund => "Rund",
            BodyShape::Eckig => "Eckig",
        }
    }
}

/// Body type that clothes and accessories are cut for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BodyType {
    Breit,
    Eng,
    #[default]
    Normal,
    Betont,
}

impl BodyType {
    pub const ALL: [BodyType; 4] =
        [BodyType::Breit, BodyType::Eng, BodyType::Normal, BodyType::Betont];

    pub fn token(self) -> &'static str {
        match self {
            BodyType::Breit => "Breit",
            BodyType::Eng => "Eng",
            BodyType::Normal => "Normal",
            BodyType::Betont => "Betont",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_tone_parse() {
        assert_eq!(SkinTone::from_str("Braun"), Some(SkinTone::Braun));
        assert_eq!(SkinTone::from_str("braun"), None);
        assert_eq!(SkinTone::default(), SkinTone::Hell);
    }

    #[test]
    fn test_hair_choice_tokens() {
        for choice in [
            HairChoice::Unset,
            HairChoice::Bald,
            HairChoice::Color(HairColor::Black),
            HairChoice::Color(HairColor::White),
        ] {
            assert_eq!(HairChoice::from_token(choice.as_token()), Some(choice));
        }
        assert_eq!(HairChoice::from_token("green"), None);
    }

    #[test]
    fn test_hair_choice_color() {
        assert_eq!(HairChoice::Bald.color(), None);
        assert_eq!(HairChoice::Unset.color(), None);
        assert_ne!(HairChoice::Bald, HairChoice::Unset);
        assert_eq!(HairChoice::Color(HairColor::Red).color(), Some(HairColor::Red));
    }

    #[test]
    fn test_default_body_type_is_normal() {
        assert_eq!(BodyType::default(), BodyType::Normal);
    }
}
