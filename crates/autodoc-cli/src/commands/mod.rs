//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use autodoc_core::AutodocConfig;

/// Load configuration from an explicit path, the default location, or
/// defaults when neither exists.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<AutodocConfig> {
    if let Some(path) = config_path {
        return Ok(AutodocConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        return Ok(AutodocConfig::from_file(&default_path)?);
    }

    Ok(AutodocConfig::default())
}
