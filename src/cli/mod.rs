//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod edit;
mod inspect;
mod list;
mod random;
mod render;
mod session;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, LogLevel};
use crate::models::{Category, HairColor, SkinTone};
use crate::output::parse_size;

use session::Session;

/// Exit codes of the `avk` binary
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Avatarkit - build layered avatars and share them as tokens
#[derive(Parser)]
#[command(name = "avk")]
#[command(about = "Avatarkit - build layered avatars from a part catalog and share them as tokens")]
#[command(version)]
pub struct Cli {
    /// Path to avatar.toml (default: discovered from the working directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Part catalog: .json, .jsonl, .json5 file or asset directory
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Root directory that part images are loaded from
    #[arg(long, global = true, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a command's starting configuration comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct TokenArgs {
    /// Share token to start from (default: a fresh configuration)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Replace an undecodable token with a random configuration
    #[arg(long)]
    pub fallback_random: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the token of a random avatar
    Random {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the parts of a category that fit the configuration
    List {
        /// Category name (head, bodytype, hair, shoes, brust, values, strengths,
        /// face, clothes, accessoires, handicap)
        #[arg(value_parser = parse_category)]
        category: Category,

        #[command(flatten)]
        token: TokenArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply editing operations and print the resulting token
    ///
    /// Operations run in this order: skin tone, hair color, bald, breast
    /// option, selects, deselects, toggles.
    Edit {
        #[command(flatten)]
        token: TokenArgs,

        /// Set the skin tone (Hell, Braun, Dunkel)
        #[arg(long, value_parser = parse_skin_tone)]
        skin_tone: Option<SkinTone>,

        /// Set the hair color (black, blonde, brunette, red, white)
        #[arg(long, value_parser = parse_hair_color)]
        hair_color: Option<HairColor>,

        /// Remove the hair
        #[arg(long)]
        bald: bool,

        /// Turn the breast option on or off
        #[arg(long, value_parser = parse_on_off, value_name = "on|off")]
        breast: Option<bool>,

        /// Select a part by id (repeatable)
        #[arg(long, value_name = "ID")]
        select: Vec<String>,

        /// Clear a category (repeatable)
        #[arg(long, value_name = "CATEGORY", value_parser = parse_category)]
        deselect: Vec<Category>,

        /// Toggle a part by id (repeatable)
        #[arg(long, value_name = "ID")]
        toggle: Vec<String>,
    },

    /// Print the draw sequence, back to front
    Layers {
        #[command(flatten)]
        token: TokenArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Composite the avatar to a PNG file
    Render {
        #[command(flatten)]
        token: TokenArgs,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Scale output by integer factor (1-16)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=16))]
        scale: Option<u8>,

        /// Frame size, e.g. 512x512
        #[arg(long, value_parser = parse_size, value_name = "WxH")]
        size: Option<[u32; 2]>,
    },

    /// Decode a token and print the configuration
    Inspect {
        /// Share token
        token: String,

        /// Output the persisted snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_str(s).ok_or_else(|| {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category '{}' (expected one of: {})", s, names.join(", "))
    })
}

fn parse_skin_tone(s: &str) -> Result<SkinTone, String> {
    SkinTone::from_str(s)
        .ok_or_else(|| format!("unknown skin tone '{}' (expected Hell, Braun or Dunkel)", s))
}

fn parse_hair_color(s: &str) -> Result<HairColor, String> {
    HairColor::from_str(s).ok_or_else(|| {
        format!("unknown hair color '{}' (expected black, blonde, brunette, red or white)", s)
    })
}

fn parse_on_off(s: &str) -> Result<bool, String> {
    match s {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(format!("expected 'on' or 'off', got '{}'", s)),
    }
}

/// Install the stderr log subscriber.
fn init_logging(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    init_logging(config.logging.level.raised(cli.verbose));

    let mut overrides = CliOverrides {
        catalog: cli.catalog.clone(),
        assets: cli.assets.clone(),
        ..Default::default()
    };
    match &cli.command {
        Commands::Random { seed } => overrides.seed = *seed,
        Commands::Render { scale, size, .. } => {
            overrides.scale = *scale;
            overrides.size = *size;
        }
        _ => {}
    }
    if let Err(e) = merge_cli_overrides(&mut config, &overrides) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let session = Session::new(config);
    match cli.command {
        Commands::Random { .. } => random::run_random(&session),
        Commands::List { category, token, json } => list::run_list(&session, category, &token, json),
        Commands::Edit { token, skin_tone, hair_color, bald, breast, select, deselect, toggle } => {
            edit::run_edit(
                &session,
                &token,
                edit::EditOps { skin_tone, hair_color, bald, breast, select, deselect, toggle },
            )
        }
        Commands::Layers { token, json } => list::run_layers(&session, &token, json),
        Commands::Render { token, output, .. } => render::run_render(&session, &token, &output),
        Commands::Inspect { token, json } => inspect::run_inspect(&token, json),
    }
}
