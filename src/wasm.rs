//! WASM API module for browser/JS interop
//!
//! Every call takes the catalog as a JSON array string and the current state
//! as a share token (`""` for a fresh avatar). Editing calls return the new
//! token; listing calls return JSON strings.

use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::catalog::Catalog;
use crate::codec;
use crate::editor::AvatarEditor;
use crate::models::{Category, HairColor, SkinTone};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn parse_catalog(catalog_json: &str) -> Result<Catalog, JsError> {
    Catalog::from_json(catalog_json)
        .map(|load| load.catalog)
        .map_err(|e| JsError::new(&format!("invalid catalog: {}", e)))
}

fn open_editor<'c>(catalog: &'c Catalog, token: &str) -> Result<AvatarEditor<'c>, JsError> {
    if token.trim().is_empty() {
        return Ok(AvatarEditor::new(catalog));
    }
    AvatarEditor::from_token(catalog, token)
        .map_err(|e| JsError::new(&format!("invalid token: {}", e)))
}

/// Decode, apply one edit, re-encode.
fn edit(
    catalog_json: &str,
    token: &str,
    op: impl FnOnce(&mut AvatarEditor<'_>) -> Result<(), JsError>,
) -> Result<String, JsError> {
    let catalog = parse_catalog(catalog_json)?;
    let mut editor = open_editor(&catalog, token)?;
    op(&mut editor)?;
    Ok(editor.token())
}

fn to_json(value: serde_json::Value) -> Result<String, JsError> {
    serde_json::to_string(&value).map_err(|e| JsError::new(&e.to_string()))
}

/// Token of a random avatar. A seed makes the result reproducible.
#[wasm_bindgen]
pub fn random_token(catalog_json: &str, seed: Option<u64>) -> Result<String, JsError> {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let catalog = parse_catalog(catalog_json)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random));
    Ok(AvatarEditor::random(&catalog, &mut rng).token())
}

/// Parts of a category the avatar can use, as `{"parts": [...], "warnings": [...]}`.
#[wasm_bindgen]
pub fn compatible_parts(catalog_json: &str, token: &str, category: &str) -> Result<String, JsError> {
    let category = Category::from_str(category)
        .ok_or_else(|| JsError::new(&format!("unknown category '{}'", category)))?;
    let catalog = parse_catalog(catalog_json)?;
    let editor = open_editor(&catalog, token)?;
    let filtered = editor.candidates(category);
    to_json(json!({ "parts": filtered.parts, "warnings": filtered.warnings }))
}

/// Parts to paint, back to front, as a JSON array.
#[wasm_bindgen]
pub fn draw_sequence(catalog_json: &str, token: &str) -> Result<String, JsError> {
    let catalog = parse_catalog(catalog_json)?;
    let editor = open_editor(&catalog, token)?;
    to_json(json!(editor.draw_sequence()))
}

/// Select a part by id.
#[wasm_bindgen]
pub fn select_part(catalog_json: &str, token: &str, part_id: &str) -> Result<String, JsError> {
    edit(catalog_json, token, |editor| {
        if editor.select_by_id(part_id) {
            Ok(())
        } else {
            Err(JsError::new(&format!("unknown part '{}'", part_id)))
        }
    })
}

/// Toggle a part by id.
#[wasm_bindgen]
pub fn toggle_item(catalog_json: &str, token: &str, part_id: &str) -> Result<String, JsError> {
    edit(catalog_json, token, |editor| {
        if editor.toggle_by_id(part_id) {
            Ok(())
        } else {
            Err(JsError::new(&format!("unknown part '{}'", part_id)))
        }
    })
}

#[wasm_bindgen]
pub fn set_skin_tone(catalog_json: &str, token: &str, tone: &str) -> Result<String, JsError> {
    let tone = SkinTone::from_str(tone)
        .ok_or_else(|| JsError::new(&format!("unknown skin tone '{}'", tone)))?;
    edit(catalog_json, token, |editor| {
        editor.set_skin_tone(tone);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn set_hair_color(catalog_json: &str, token: &str, color: &str) -> Result<String, JsError> {
    let color = HairColor::from_str(color)
        .ok_or_else(|| JsError::new(&format!("unknown hair color '{}'", color)))?;
    edit(catalog_json, token, |editor| {
        editor.set_hair_color(color);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn remove_hair(catalog_json: &str, token: &str) -> Result<String, JsError> {
    edit(catalog_json, token, |editor| {
        editor.remove_hair();
        Ok(())
    })
}

#[wasm_bindgen]
pub fn set_breast_option(catalog_json: &str, token: &str, enabled: bool) -> Result<String, JsError> {
    edit(catalog_json, token, |editor| {
        editor.set_breast_option(enabled);
        Ok(())
    })
}

/// Whether a token decodes.
#[wasm_bindgen]
pub fn validate_token(token: &str) -> bool {
    codec::decode(token).is_ok()
}
