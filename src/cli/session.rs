//! Shared state of one CLI invocation: settings, catalog and start configuration.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::process::ExitCode;
use tracing::info;

use crate::catalog::{Catalog, Registry};
use crate::codec;
use crate::config::AvatarConfig;
use crate::configuration::Configuration;
use crate::editor::generate_random;

use super::{TokenArgs, EXIT_ERROR};

pub(crate) struct Session {
    pub(crate) config: AvatarConfig,
}

impl Session {
    pub(crate) fn new(config: AvatarConfig) -> Self {
        Self { config }
    }

    /// Load the catalog leniently, reporting problems on stderr.
    pub(crate) fn load_catalog(&self) -> Catalog {
        let load = Catalog::load_lenient(&self.config.catalog.path);
        for warning in &load.warnings {
            eprintln!("Warning: {}", warning);
        }
        info!(parts = load.catalog.len(), path = %self.config.catalog.path.display(), "catalog ready");
        load.catalog
    }

    /// Random source: the configured seed, or a fresh one that is logged.
    pub(crate) fn rng(&self) -> ChaCha8Rng {
        let seed = self.config.random.seed.unwrap_or_else(rand::random);
        info!(seed, "random seed");
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// Starting configuration for a command.
    ///
    /// No token means a fresh configuration. An undecodable token is an error
    /// unless `--fallback-random` asks for a random configuration instead.
    pub(crate) fn start_configuration(
        &self,
        args: &TokenArgs,
        catalog: &Catalog,
    ) -> Result<Configuration, ExitCode> {
        let Some(token) = args.token.as_deref() else {
            return Ok(Configuration::new());
        };
        match codec::decode(token) {
            Ok(config) => Ok(config),
            Err(e) if args.fallback_random => {
                eprintln!("Warning: invalid token ({}), using a random avatar", e);
                Ok(generate_random(catalog, &mut self.rng()))
            }
            Err(e) => {
                eprintln!("Error: invalid token: {}", e);
                Err(ExitCode::from(EXIT_ERROR))
            }
        }
    }
}
