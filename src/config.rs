use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// How results are printed by the CLI.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: bool,
    /// Text printed in place of a sum when the sign check fails.
    #[serde(default = "default_no_result")]
    pub no_result: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            no_result: default_no_result(),
        }
    }
}

fn default_no_result() -> String {
    "none".into()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config {}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.no_result.trim().is_empty() {
            return Err(Error::config("output.no_result must not be empty"));
        }
        Ok(())
    }
}
