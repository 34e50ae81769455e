use std::path::{Path, PathBuf};

use color_eyre::{eyre::WrapErr, Result};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "MYSHELL_CONFIG";
const CONFIG_FILE: &str = ".myshell.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Printed once before the first interactive prompt.
    pub greeting: String,
    pub log_dir: PathBuf,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: String::from(r#"Type "help" to bring up a list of commands."#),
            log_dir: std::env::temp_dir(),
            log_file: String::from("myshell.log"),
        }
    }
}

impl Config {
    /// `$MYSHELL_CONFIG`, falling back to `~/.myshell.toml`.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(CONFIG_FILE)))
    }

    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file is not an error; a malformed one is.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;

        Self::parse(&contents).wrap_err_with(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
