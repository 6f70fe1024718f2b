//! Edit command implementation

use std::process::ExitCode;

use crate::editor::AvatarEditor;
use crate::models::{Category, HairColor, SkinTone};

use super::session::Session;
use super::{TokenArgs, EXIT_SUCCESS};

/// Operations requested on the command line, applied in field order.
#[derive(Debug, Default)]
pub struct EditOps {
    pub skin_tone: Option<SkinTone>,
    pub hair_color: Option<HairColor>,
    pub bald: bool,
    pub breast: Option<bool>,
    pub select: Vec<String>,
    pub deselect: Vec<Category>,
    pub toggle: Vec<String>,
}

/// Execute the edit command - apply operations and print the new token
pub fn run_edit(session: &Session, token: &TokenArgs, ops: EditOps) -> ExitCode {
    let catalog = session.load_catalog();
    let config = match session.start_configuration(token, &catalog) {
        Ok(config) => config,
        Err(code) => return code,
    };
    let mut editor = AvatarEditor::with_configuration(&catalog, config);

    if let Some(tone) = ops.skin_tone {
        editor.set_skin_tone(tone);
    }
    if let Some(color) = ops.hair_color {
        editor.set_hair_color(color);
    }
    if ops.bald {
        editor.remove_hair();
    }
    if let Some(enabled) = ops.breast {
        editor.set_breast_option(enabled);
    }
    for id in &ops.select {
        if !editor.select_by_id(id) {
            eprintln!("Warning: unknown part '{}' not selected", id);
        }
    }
    for category in ops.deselect {
        editor.deselect(category);
    }
    for id in &ops.toggle {
        if !editor.toggle_by_id(id) {
            eprintln!("Warning: unknown part '{}' not toggled", id);
        }
    }

    println!("{}", editor.token());
    ExitCode::from(EXIT_SUCCESS)
}
