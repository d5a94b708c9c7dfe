use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub general: General,
}
impl Config {
    pub const FILENAME: &str = "jukebox-strips.toml";

    /// Reads the config from `dir`, falling back to defaults if there is no file.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(Self::FILENAME);
        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct General {
    /// Open the PDF in the system viewer once it has been written.
    pub open_pdf: bool,
    /// Wait for a keypress before exiting when the CSV file cannot be found.
    pub pause_on_missing_input: bool,
}
impl Default for General {
    fn default() -> Self {
        Self {
            open_pdf: true,
            pause_on_missing_input: true,
        }
    }
}
