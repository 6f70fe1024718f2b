//! Part catalog: the immutable list of selectable parts.
//!
//! This module provides:
//! - `Catalog`, an insertion-ordered, id-indexed list of parts
//! - `Registry`, the lookup trait the catalog implements
//! - Loaders for JSON arrays, JSONL/JSON5 streams and asset directories
//!
//! Loading has a strict form (`Catalog::load`, returns `CatalogError`) and a
//! lenient form (`Catalog::load_lenient`) that degrades to an empty catalog.

pub mod discovery;
pub mod parser;
mod traits;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Category, Part, Warning};

pub use discovery::discover_parts;
pub use parser::{parse_array, parse_stream, ParseError, ParseResult};
pub use traits::Registry;

/// Error when a catalog source cannot be read at all.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The source file could not be read
    #[error("Failed to read catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The source is a JSON document that does not parse
    #[error("Failed to parse catalog '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    /// The source loaded but holds no usable parts
    #[error("Catalog '{}' contains no parts", path.display())]
    Empty { path: PathBuf },
}

/// A loaded catalog together with the non-fatal problems found on the way.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub warnings: Vec<Warning>,
}

/// Immutable, insertion-ordered list of parts.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    parts: Vec<Part>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from parts, keeping the first part of each id.
    pub fn from_parts(parts: impl IntoIterator<Item = Part>) -> Self {
        let mut catalog = Self::new();
        for warning in catalog.extend(parts) {
            warn!("{}", warning);
        }
        catalog
    }

    /// Parse a catalog from a JSON array string.
    pub fn from_json(text: &str) -> Result<CatalogLoad, ParseError> {
        let parsed = parse_array(text)?;
        Ok(Self::from_parse_result(parsed))
    }

    fn from_parse_result(parsed: ParseResult) -> CatalogLoad {
        let mut catalog = Self::new();
        let mut warnings = parsed.warnings;
        warnings.extend(catalog.extend(parsed.parts));
        CatalogLoad { catalog, warnings }
    }

    fn extend(&mut self, parts: impl IntoIterator<Item = Part>) -> Vec<Warning> {
        let mut warnings = Vec::new();
        for part in parts {
            if self.index.contains_key(&part.id) {
                warnings.push(Warning::new(format!(
                    "duplicate part id '{}' ignored (first occurrence kept)",
                    part.id
                )));
                continue;
            }
            self.index.insert(part.id.clone(), self.parts.len());
            self.parts.push(part);
        }
        warnings
    }

    /// Load a catalog from a file or an asset directory.
    ///
    /// - directory: scanned for `<category>/**/*.png`
    /// - `.json`: a JSON array of parts
    /// - anything else: a JSONL/JSON5 stream of part objects
    pub fn load(path: &Path) -> Result<CatalogLoad, CatalogError> {
        let parsed = if path.is_dir() {
            discover_parts(path)
        } else {
            let text = fs::read_to_string(path)
                .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
            if path.extension().is_some_and(|e| e == "json") {
                parse_array(&text)
                    .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })?
            } else {
                parse_stream(text.as_bytes())
            }
        };

        let load = Self::from_parse_result(parsed);
        if load.catalog.is_empty() {
            return Err(CatalogError::Empty { path: path.to_path_buf() });
        }
        info!(
            path = %path.display(),
            parts = load.catalog.len(),
            warnings = load.warnings.len(),
            "catalog loaded"
        );
        Ok(load)
    }

    /// Load a catalog, degrading to an empty one if the source is unusable.
    ///
    /// Dependents cope with an empty catalog: the resolver offers no
    /// candidates and the compositor draws nothing.
    pub fn load_lenient(path: &Path) -> CatalogLoad {
        match Self::load(path) {
            Ok(load) => load,
            Err(e) => {
                warn!(error = %e, "catalog unavailable, continuing with an empty catalog");
                CatalogLoad { catalog: Self::new(), warnings: vec![Warning::new(e.to_string())] }
            }
        }
    }

    /// All parts in source order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Parts of one category in source order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Part> + '_ {
        self.parts.iter().filter(move |p| p.category == category)
    }

    /// The first part of a category, for categories that hold one fixed part.
    pub fn first_in(&self, category: Category) -> Option<&Part> {
        self.in_category(category).next()
    }

    /// Look a part up by id (same as [`Registry::get`]).
    pub fn part(&self, id: &str) -> Option<&Part> {
        self.index.get(id).map(|&i| &self.parts[i])
    }
}

impl Registry<Part> for Catalog {
    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn get(&self, id: &str) -> Option<&Part> {
        self.part(id)
    }

    fn len(&self) -> usize {
        self.parts.len()
    }

    fn ids(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        Box::new(self.parts.iter().map(|p| &p.id))
    }
}
