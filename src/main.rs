//! Avatarkit - command-line tool for building and sharing layered avatars

use std::process::ExitCode;

use avatarkit::cli;

fn main() -> ExitCode {
    cli::run()
}
