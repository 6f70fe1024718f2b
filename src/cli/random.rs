//! Random command implementation

use std::process::ExitCode;

use crate::editor::AvatarEditor;

use super::session::Session;
use super::EXIT_SUCCESS;

/// Execute the random command - print the token of a random avatar
pub fn run_random(session: &Session) -> ExitCode {
    let catalog = session.load_catalog();
    let editor = AvatarEditor::random(&catalog, &mut session.rng());
    println!("{}", editor.token());
    ExitCode::from(EXIT_SUCCESS)
}
