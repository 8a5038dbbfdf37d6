use std::path::PathBuf;

use anyhow::Result;
use config::{Config, File};
use serde::Deserialize;

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Global configuration at ~/.config/termcal/config.toml
///
/// Every field has a default, so the file is optional and `--out` on the
/// command line always wins over it.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("termcal");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}
