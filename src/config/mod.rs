//! Project configuration for the `avk` command line.
//!
//! Provides types and discovery for `avatar.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
