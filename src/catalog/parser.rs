//! Lenient parsing of catalog files.
//!
//! Supports a JSON array of parts, or a stream of part objects (single-line
//! JSONL or multi-line JSON5 with comments and trailing commas).

use serde::Deserialize;
use std::io::{BufRead, BufReader, Read};
use thiserror::Error;

use crate::models::{Category, Part, Warning};

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// Result of parsing a part stream.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub parts: Vec<Part>,
    pub warnings: Vec<Warning>,
}

/// A part record as written in a catalog file, before the category is checked.
#[derive(Debug, Clone, Deserialize)]
struct RawPart {
    id: String,
    src: String,
    category: String,
    #[serde(default)]
    subcategory: Option<String>,
}

impl RawPart {
    fn into_part(self) -> Result<Part, String> {
        match Category::from_str(&self.category) {
            Some(category) => Ok(Part {
                id: self.id,
                src: self.src,
                category,
                subcategory: self.subcategory,
            }),
            None => Err(format!("part '{}' has unknown category '{}'", self.id, self.category)),
        }
    }
}

/// Parse a single JSON5 object into a part.
pub fn parse_part(text: &str, line_number: usize) -> Result<Part, ParseError> {
    let raw: RawPart = json5::from_str(text)
        .map_err(|e| ParseError { message: e.to_string(), line: line_number })?;
    raw.into_part().map_err(|message| ParseError { message, line: line_number })
}

/// Parse a JSON array of part records.
///
/// A malformed document is an error; individual records with an unknown
/// category are skipped with a warning.
pub fn parse_array(text: &str) -> Result<ParseResult, ParseError> {
    let raws: Vec<RawPart> =
        serde_json::from_str(text).map_err(|e| ParseError { message: e.to_string(), line: e.line() })?;

    let mut result = ParseResult::default();
    for raw in raws {
        match raw.into_part() {
            Ok(part) => result.parts.push(part),
            Err(message) => result.warnings.push(Warning::new(message)),
        }
    }
    Ok(result)
}

/// Parse a stream of part objects.
///
/// Objects may span several lines; a new object starts once braces balance.
/// Malformed objects become warnings and parsing continues.
pub fn parse_stream<R: Read>(reader: R) -> ParseResult {
    let mut result = ParseResult::default();
    let mut lines = BufReader::new(reader).lines();

    let mut accumulator = String::new();
    let mut start_line = 1;
    let mut current_line = 1;
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(Ok(line)) = lines.next() {
        if accumulator.is_empty() && line.trim().is_empty() {
            current_line += 1;
            continue;
        }
        if accumulator.is_empty() {
            start_line = current_line;
        } else {
            accumulator.push('\n');
        }
        accumulator.push_str(&line);

        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            if escape_next {
                escape_next = false;
                continue;
            }
            match ch {
                '\\' if in_string => escape_next = true,
                '"' => in_string = !in_string,
                '/' if !in_string && chars.peek() == Some(&'/') => break,
                '{' if !in_string => depth += 1,
                '}' if !in_string => depth -= 1,
                _ => {}
            }
        }

        if depth <= 0 {
            push_object(&mut result, &accumulator, start_line);
            accumulator.clear();
            depth = 0;
        }
        current_line += 1;
    }

    if !accumulator.trim().is_empty() {
        result.warnings.push(Warning::new(format!(
            "line {}: unterminated object at end of input",
            start_line
        )));
    }

    result
}

fn push_object(result: &mut ParseResult, text: &str, line: usize) {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with("//") {
        return;
    }
    match parse_part(trimmed, line) {
        Ok(part) => result.parts.push(part),
        Err(e) => result.warnings.push(Warning::new(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_part() {
        let part = parse_part(
            r#"{"id": "head_hell_oval", "src": "head/Hell_Oval.png", "category": "head"}"#,
            1,
        )
        .unwrap();
        assert_eq!(part.category, Category::Head);
        assert_eq!(part.id, "head_hell_oval");
    }

    #[test]
    fn test_parse_part_unknown_category() {
        let err = parse_part(r#"{"id": "x", "src": "x.png", "category": "hats"}"#, 3).unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("unknown category 'hats'"));
    }

    #[test]
    fn test_parse_stream_jsonl() {
        let input = r#"{"id": "a", "src": "a.png", "category": "face"}
{"id": "b", "src": "b.png", "category": "shoes"}
"#;
        let result = parse_stream(Cursor::new(input));
        assert!(result.warnings.is_empty());
        let ids: Vec<_> = result.parts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_stream_multiline_json5() {
        let input = r#"{
  id: "hat_cap",
  src: "accessoires/cap.png", // universal
  category: "accessoires",
}

{id: "shoes_boots", src: "shoes/boots.png", category: "shoes"}
"#;
        let result = parse_stream(Cursor::new(input));
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert_eq!(result.parts.len(), 2);
        assert_eq!(result.parts[0].category, Category::Accessoires);
    }

    #[test]
    fn test_parse_stream_continues_after_bad_line() {
        let input = r#"{"id": "a", "src": "a.png", "category": "face"}
{not valid
}
{"id": "c", "src": "c.png", "category": "hats"}
{"id": "d", "src": "d.png", "category": "face"}
"#;
        let result = parse_stream(Cursor::new(input));
        let ids: Vec<_> = result.parts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].message.starts_with("line 2:"));
        assert!(result.warnings[1].message.contains("hats"));
    }

    #[test]
    fn test_parse_array() {
        let input = r#"[
            {"id": "a", "src": "a.png", "category": "values"},
            {"id": "b", "src": "b.png", "category": "nope"}
        ]"#;
        let result = parse_array(input).unwrap();
        assert_eq!(result.parts.len(), 1);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_parse_array_malformed() {
        assert!(parse_array("[{").is_err());
    }
}
