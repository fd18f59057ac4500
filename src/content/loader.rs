//! Loader for the hero movement RON file.

use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::movement::{MovementTuning, SimulationSettings, TuningError};

/// Default location of the movement file, relative to the working directory.
pub const MOVEMENT_CONFIG_PATH: &str = "assets/data/hero_movement.ron";

/// Contents of `hero_movement.ron`. Missing sections fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub tuning: MovementTuning,
    pub simulation: SimulationSettings,
}

/// Error type for movement config loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("Invalid values in {file}: {source}")]
    Invalid {
        file: String,
        #[source]
        source: TuningError,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate movement config text. `file` only labels errors.
pub fn parse_movement_config(contents: &str, file: &str) -> Result<MovementConfig, ContentLoadError> {
    let config: MovementConfig =
        ron_options()
            .from_str(contents)
            .map_err(|source| ContentLoadError::Parse {
                file: file.to_string(),
                source,
            })?;

    config
        .tuning
        .validate()
        .and_then(|()| config.simulation.validate())
        .map_err(|source| ContentLoadError::Invalid {
            file: file.to_string(),
            source,
        })?;

    Ok(config)
}

pub fn load_movement_config(path: &Path) -> Result<MovementConfig, ContentLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file.clone(),
        source,
    })?;
    parse_movement_config(&contents, &file)
}
