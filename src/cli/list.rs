//! List and layers command implementations

use serde_json::json;
use std::process::ExitCode;

use crate::editor::AvatarEditor;
use crate::models::Category;

use super::session::Session;
use super::{TokenArgs, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the list command - parts of a category the configuration can use
pub fn run_list(session: &Session, category: Category, token: &TokenArgs, json: bool) -> ExitCode {
    let catalog = session.load_catalog();
    let config = match session.start_configuration(token, &catalog) {
        Ok(config) => config,
        Err(code) => return code,
    };
    let editor = AvatarEditor::with_configuration(&catalog, config);
    let filtered = editor.candidates(category);

    if json {
        let output = json!({
            "category": category,
            "parts": filtered.parts,
            "warnings": filtered.warnings,
        });
        return print_json(&output);
    }

    for warning in &filtered.warnings {
        eprintln!("Warning: {}", warning);
    }
    let selected = editor.configuration();
    for part in &filtered.parts {
        let marker = if selected.selected_part(category) == Some(part.id.as_str())
            || selected.has_item(&part.id)
        {
            "*"
        } else {
            " "
        };
        println!("{} {:<32} {}", marker, part.id, part.src);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the layers command - print the draw sequence
pub fn run_layers(session: &Session, token: &TokenArgs, json: bool) -> ExitCode {
    let catalog = session.load_catalog();
    let config = match session.start_configuration(token, &catalog) {
        Ok(config) => config,
        Err(code) => return code,
    };
    let editor = AvatarEditor::with_configuration(&catalog, config);
    let sequence = editor.draw_sequence();

    if json {
        return print_json(&json!(sequence));
    }

    for (index, part) in sequence.iter().enumerate() {
        println!("{:>2}. {:<12} {:<32} {}", index + 1, part.category.as_str(), part.id, part.src);
    }
    ExitCode::from(EXIT_SUCCESS)
}

pub(super) fn print_json(value: &serde_json::Value) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: cannot serialize output: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
