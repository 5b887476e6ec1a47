mod default;

pub use default::{CONFIG_FILE_NAME, TEMPLATES_DIR_NAME, default_templates_root};

use crate::error::{Error, Result};
use serde::Deserialize;
use std::{
    io,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Directory holding the named templates.
    /// Relative paths resolve against the directory of the config file.
    ///
    /// Default: `templates` under the installation root
    #[serde(default = "default_templates_root")]
    pub templates_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_root: default_templates_root(),
        }
    }
}

impl Config {
    /// Reads a `Scaffold.toml`. A missing file falls back to the defaults
    /// unless the path came from the user.
    pub fn parse(path: impl AsRef<Path>, user_input: bool) -> Result<Self> {
        let path = path.as_ref();
        let config = match std::fs::read_to_string(path) {
            Ok(config) => config,
            Err(err) if !user_input && err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Self = toml::from_str(&config)?;
        Ok(config)
    }

    /// Templates root with relative entries anchored at `base_dir`.
    pub fn templates_root(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.templates_root)
    }
}
