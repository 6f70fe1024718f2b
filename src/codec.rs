//! Share tokens: compact, URL-safe encoding of a configuration.
//!
//! A token is `v1.` followed by the unpadded URL-safe base64 of a compact JSON
//! object with fixed field order:
//!
//! | key | content |
//! |-----|---------|
//! | `p` | single-choice selections, category name -> part id (sorted) |
//! | `i` | multi-select items in selection order |
//! | `s` | skin tone (`Hell`, `Braun`, `Dunkel`) |
//! | `h` | `""` (unset), `"bald"` or a hair color |
//! | `b` | breast option |
//!
//! Tokens only contain `[A-Za-z0-9_.-]`. Category names the crate does not
//! know are carried through untouched; the catalog decides what is valid.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::configuration::Configuration;
use crate::models::{Category, HairChoice, SkinTone};

/// Version prefix of tokens produced by [`encode`].
pub const TOKEN_PREFIX: &str = "v1.";

/// Why a token could not be turned back into a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Token does not start with a version prefix
    #[error("token has no version prefix")]
    MissingVersion,
    /// Token was produced by an unknown format version
    #[error("unsupported token version '{0}'")]
    UnsupportedVersion(String),
    /// Payload is not valid URL-safe base64
    #[error("token payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Payload is not the expected JSON object
    #[error("token payload is malformed: {0}")]
    Json(String),
    /// Skin tone is not one of the known tones
    #[error("unknown skin tone '{0}'")]
    SkinTone(String),
    /// Hair entry is neither empty, `bald` nor a known color
    #[error("unknown hair value '{0}'")]
    Hair(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct Wire {
    #[serde(default)]
    p: BTreeMap<String, String>,
    #[serde(default)]
    i: Vec<String>,
    #[serde(default = "default_skin_tone")]
    s: String,
    #[serde(default)]
    h: String,
    #[serde(default)]
    b: bool,
}

fn default_skin_tone() -> String {
    SkinTone::default().token().to_string()
}

/// Encode a configuration. Equal configurations give equal tokens.
pub fn encode(config: &Configuration) -> String {
    let mut p: BTreeMap<String, String> = config
        .selected_parts()
        .iter()
        .map(|(category, id)| (category.as_str().to_string(), id.clone()))
        .collect();
    for (name, id) in config.unknown_parts() {
        p.entry(name.clone()).or_insert_with(|| id.clone());
    }

    let wire = Wire {
        p,
        i: config.selected_items().to_vec(),
        s: config.skin_tone().token().to_string(),
        h: config.hair().as_token().to_string(),
        b: config.breast_option(),
    };
    // Strings, string-keyed maps and bools always serialize
    let json = serde_json::to_vec(&wire).unwrap_or_default();
    format!("{}{}", TOKEN_PREFIX, URL_SAFE_NO_PAD.encode(json))
}

/// Decode a token produced by [`encode`].
///
/// Malformed tokens return an error and never panic. Duplicate items keep
/// their first occurrence.
pub fn decode(token: &str) -> Result<Configuration, DecodeError> {
    let token = token.trim();
    let payload = match token.strip_prefix(TOKEN_PREFIX) {
        Some(payload) => payload,
        None => {
            return Err(match token.split_once('.') {
                Some((version, _)) => DecodeError::UnsupportedVersion(version.to_string()),
                None => DecodeError::MissingVersion,
            })
        }
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    let wire: Wire =
        serde_json::from_slice(&bytes).map_err(|e| DecodeError::Json(e.to_string()))?;

    let mut config = Configuration::new();
    for (name, id) in wire.p {
        match Category::from_str(&name) {
            Some(category) => config.set_part(category, id),
            None => {
                config.unknown_parts.insert(name, id);
            }
        }
    }
    for id in wire.i {
        config.add_item(id);
    }
    config.skin_tone = SkinTone::from_str(&wire.s).ok_or(DecodeError::SkinTone(wire.s))?;
    config.hair = HairChoice::from_token(&wire.h).ok_or(DecodeError::Hair(wire.h))?;
    config.breast_option = wire.b;

    Ok(config)
}
