//! Reading and writing configuration files.

use std::io::{Read, Write};
use std::path::Path;

use tracing::info;

use crate::record::ConfigFile;
use crate::{ConfigError, ConfigResult, SteeringConfig};

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> ConfigResult<SteeringConfig> {
    let file = std::fs::File::open(path)?;
    let config = load_config_reader(file)?;
    info!(
        path = %path.display(),
        pursuit = %config.pursuit,
        threshold = config.patrol.threshold,
        "steering config loaded"
    );
    Ok(config)
}

/// Like [`load_config`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded defaults.
pub fn load_config_reader<R: Read>(reader: R) -> ConfigResult<SteeringConfig> {
    let file: ConfigFile = serde_json::from_reader(reader)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    file.into_config()
}

/// Write the effective configuration as pretty-printed JSON.
///
/// The output loads back to an equal configuration (up to degree/radian
/// rounding).
pub fn write_config<W: Write>(config: &SteeringConfig, writer: W) -> ConfigResult<()> {
    serde_json::to_writer_pretty(writer, &ConfigFile::from(config))
        .map_err(|e| ConfigError::Parse(e.to_string()))
}
