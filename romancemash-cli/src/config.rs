/// Config file loading and creation for the romancemash CLI.
///
/// Config lives at ~/.config/romancemash/config.toml.
/// All fields are optional; CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RomancemashConfig {
    pub data_dir: Option<String>,
    pub items: Option<Vec<String>>,
    pub default_category: Option<String>,
    pub default_context: Option<String>,
    pub top_n: Option<usize>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# romancemash configuration
# All values here can be overridden by CLI flags.

# Where votes and rankings are stored
# data_dir = \"~/.local/share/romancemash\"

# Replace the built-in film list (at least 2 distinct titles).
# Ratings of titles you remove are dropped; new titles start at 1000.
# items = [\"Titanic (1997)\", \"Notting Hill (1999)\", \"About Time (2013)\"]

# Category used when --category is not given: CL, RC, DR, IN, CI
# default_category = \"CL\"

# Context used when --context is not given: CITA, LLORAR, LIGERO, INOLV
# default_context = \"CITA\"

# Rows shown by `romancemash top`
# top_n = 10
";

fn home_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home)
}

/// Returns the default config path: ~/.config/romancemash/config.toml
pub fn config_path() -> PathBuf {
    home_dir().join(".config").join("romancemash").join("config.toml")
}

/// Returns the default data directory: ~/.local/share/romancemash
pub fn default_data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("romancemash")
}

/// Expand a leading `~/` against $HOME.
pub fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(raw),
    }
}

/// Parse config text. Kept separate from file IO so it can be tested directly.
pub fn parse_config(content: &str) -> Result<RomancemashConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> RomancemashConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => RomancemashConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config(path: &Path) {
    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));
}
