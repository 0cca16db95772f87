//! Configuration loading for qbtally.
//!
//! The config file declares where the packet collection lives and which
//! packet subdirectories to scan:
//!
//! ```toml
//! packet_dir = "packets"
//! packet_list = ["2023-regionals", "2023-nationals"]
//! ```
//!
//! Relative paths resolve against the config file's own directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base directory holding the packet collection.
    pub packet_dir: PathBuf,
    /// Packet subdirectory names to scan, each resolved under
    /// `packet_dir`.
    pub packet_list: Vec<String>,
}

impl Config {
    /// The packet base directory, resolved relative to the config
    /// file's directory.
    pub fn packet_base(&self, config_path: &Path) -> PathBuf {
        let root = config_path.parent().unwrap_or_else(|| Path::new("."));
        root.join(&self.packet_dir)
    }

    /// Deduplicated scan directories under the packet base.
    pub fn packet_paths(&self, config_path: &Path) -> Vec<PathBuf> {
        let base = self.packet_base(config_path);
        let unique: BTreeSet<&str> = self.packet_list.iter().map(String::as_str).collect();
        unique.into_iter().map(|name| base.join(name)).collect()
    }
}

/// Load and parse the config file. A missing or malformed file is a
/// fatal configuration error; nothing is processed without one.
pub fn load_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read the configuration file: {}", path.display()))?;
    let config: Config =
        toml::from_str(&contents).context("Could not parse the configuration file as TOML")?;
    Ok(config)
}
