//! Data models for avatar parts and their attributes

mod attributes;
mod category;
mod part;
mod warning;

// Re-export all public types
pub use attributes::{BodyShape, BodyType, HairChoice, HairColor, SkinTone};
pub use category::{Category, SelectMode};
pub use part::Part;
pub use warning::Warning;
