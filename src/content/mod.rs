//! Content domain: data-driven movement configuration.

mod loader;
#[cfg(test)]
mod tests;

pub use loader::{
    ContentLoadError, MOVEMENT_CONFIG_PATH, MovementConfig, load_movement_config,
    parse_movement_config,
};

use bevy::prelude::*;
use std::path::Path;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_movement_content);
    }
}

/// Replace the default movement resources with the file's values. A missing
/// or invalid file keeps the defaults.
fn load_movement_content(mut commands: Commands) {
    match load_movement_config(Path::new(MOVEMENT_CONFIG_PATH)) {
        Ok(config) => {
            info!(
                "Loaded movement config: {} jump levels, {} Hz fixed clock",
                config.tuning.multi_jump_count_max(),
                config.simulation.fixed_hz
            );
            commands.insert_resource(config.tuning);
            commands.insert_resource(config.simulation);
        }
        Err(err) => {
            warn!("{}; using default movement tuning", err);
        }
    }
}
