//! Building a catalog from a directory of layer images.
//!
//! Layout: `<root>/<category>/[<subcategory>/...]<Name>.png`. The part id is
//! the category, every nested directory and the name joined by `_`,
//! lower-cased; `src` keeps the original relative path so case-sensitive
//! tokens in file names still infer. The first nested directory is the
//! subcategory.

use glob::{glob, Pattern};
use std::path::{Component, Path};

use super::parser::ParseResult;
use crate::models::{Category, Part, Warning};

/// Find all PNG layers below `root` and turn them into parts.
///
/// Files are visited in sorted path order so repeated scans produce the same
/// catalog order.
pub fn discover_parts(root: &Path) -> ParseResult {
    let mut result = ParseResult::default();
    let pattern = format!("{}/**/*.png", Pattern::escape(&root.display().to_string()));

    let mut paths: Vec<_> = match glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(e) => {
            result.warnings.push(Warning::new(format!("invalid asset pattern: {}", e)));
            return result;
        }
    };
    paths.sort();

    for path in paths {
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        match part_from_relative(rel) {
            Ok(part) => result.parts.push(part),
            Err(message) => result.warnings.push(Warning::new(message)),
        }
    }

    result
}

/// Derive a part from an image path relative to the asset root.
pub fn part_from_relative(rel: &Path) -> Result<Part, String> {
    let dirs: Vec<String> = rel
        .parent()
        .map(|p| {
            p.components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    let display = rel.display();
    let Some(category_dir) = dirs.first() else {
        return Err(format!("'{}' is not inside a category directory", display));
    };
    let Some(category) = Category::from_str(&category_dir.to_lowercase()) else {
        return Err(format!("'{}' is in unknown category directory '{}'", display, category_dir));
    };
    let stem = rel
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .ok_or_else(|| format!("'{}' has no file name", display))?;

    let subcategory = dirs.get(1).cloned();
    let id = dirs[1..]
        .iter()
        .map(|d| d.to_lowercase())
        .chain(std::iter::once(stem))
        .fold(category.as_str().to_string(), |id, segment| id + "_" + &segment);
    let src = dirs
        .iter()
        .map(String::as_str)
        .chain(rel.file_name().map(|n| n.to_str().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join("/");

    let part = Part::new(id, category, src);
    Ok(match subcategory {
        Some(sub) => part.with_subcategory(sub),
        None => part,
    })
}
