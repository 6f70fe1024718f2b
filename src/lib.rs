//! Avatarkit - layered avatar configuration, compatibility rules and share tokens
//!
//! This library provides functionality to:
//! - Load a catalog of categorized image parts (JSON, JSONL/JSON5, asset directories)
//! - Infer skin tone, hair color and body shape from part names
//! - Filter parts to those compatible with the current avatar
//! - Edit an avatar while keeping head, body, hair and clothes consistent
//! - Order the selected parts into a back-to-front draw sequence
//! - Encode avatars into compact URL-safe tokens and back

pub mod catalog;
pub mod cli;
pub mod codec;
pub mod compositor;
pub mod config;
pub mod configuration;
pub mod editor;
pub mod inference;
pub mod models;
pub mod output;
pub mod resolver;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(test)]
mod testing;

pub use catalog::{Catalog, Registry};
pub use codec::{decode, encode, DecodeError};
pub use configuration::Configuration;
pub use editor::AvatarEditor;
