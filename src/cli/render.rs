//! Render command implementation

use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use crate::compositor::{composite, ImageCanvas};
use crate::output::{save_png, scale_image};

use super::session::Session;
use super::{TokenArgs, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the render command - composite the avatar into a PNG
pub fn run_render(session: &Session, token: &TokenArgs, output: &Path) -> ExitCode {
    let catalog = session.load_catalog();
    let config = match session.start_configuration(token, &catalog) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let render = &session.config.render;
    let [width, height] = render.size;
    let mut canvas = ImageCanvas::new(&session.config.catalog.assets, width, height);
    let layers = composite(&config, &catalog, &mut canvas);

    let (image, warnings) = canvas.finish();
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    let image = scale_image(image, render.scale);
    if let Err(e) = save_png(&image, output) {
        eprintln!("Error: Failed to save '{}': {}", output.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    info!(layers, skipped = warnings.len(), "rendered avatar");
    println!("Saved {}", output.display());
    ExitCode::from(EXIT_SUCCESS)
}
