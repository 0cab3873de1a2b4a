//! Global context for CLI commands

use anyhow::Result;
use std::env;
use std::path::Path;

use namegen_core::NameGenerator;
use namegen_core::NamegenError;
use namegen_core::config::{Config, consts::CONFIG_FILE_NAME};

/// Loaded configuration plus a bootstrapped generator
pub struct Context {
    pub config: Config,
    pub generator: NameGenerator,
}

impl Context {
    /// Load configuration, fetch sources and build the generator
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config file does not exist or cannot be parsed
    /// - The template or word table cannot be fetched
    /// - The template or word table is malformed
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = load_config(config_path)?;
        let source = config.build_source()?;
        let generator = NameGenerator::bootstrap(source.as_ref(), config.substitutions())?;
        Ok(Self { config, generator })
    }
}

/// Resolve the configuration to use
///
/// An explicit path must exist. Otherwise `./namegen.toml` is used when
/// present, and defaults relative to the working directory when not.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.is_file() {
            return Err(NamegenError::ConfigNotFound(path.display().to_string()).into());
        }
        return Ok(Config::from_file(path)?);
    }

    let current_dir = env::current_dir()?;
    let default_path = current_dir.join(CONFIG_FILE_NAME);
    if default_path.is_file() {
        return Ok(Config::from_file(&default_path)?);
    }

    tracing::debug!(dir = %current_dir.display(), "no namegen.toml found, using defaults");
    Ok(Config {
        base_dir: Some(current_dir),
        ..Config::default()
    })
}
