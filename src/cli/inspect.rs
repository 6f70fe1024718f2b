//! Inspect command implementation

use std::process::ExitCode;

use crate::codec;
use crate::models::HairChoice;

use super::list::print_json;
use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the inspect command - decode a token and describe it
pub fn run_inspect(token: &str, json: bool) -> ExitCode {
    let config = match codec::decode(token) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid token: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if json {
        return match serde_json::to_value(&config) {
            Ok(value) => print_json(&value),
            Err(e) => {
                eprintln!("Error: cannot serialize configuration: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    let hair = match config.hair() {
        HairChoice::Unset => "(unset)".to_string(),
        HairChoice::Bald => "bald".to_string(),
        HairChoice::Color(color) => color.to_string(),
    };
    println!("skin tone:     {}", config.skin_tone());
    println!("hair:          {}", hair);
    println!("breast option: {}", if config.breast_option() { "on" } else { "off" });

    println!("parts:");
    for (category, id) in config.selected_parts() {
        println!("  {:<12} {}", category.as_str(), id);
    }
    for (name, id) in config.unknown_parts() {
        println!("  {:<12} {} (unknown category)", name, id);
    }
    println!("items:");
    for id in config.selected_items() {
        println!("  {}", id);
    }
    ExitCode::from(EXIT_SUCCESS)
}
