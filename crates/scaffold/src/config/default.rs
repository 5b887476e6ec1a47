use crate::utils::install_dir;
use std::{env, path::PathBuf};

pub const CONFIG_FILE_NAME: &str = "Scaffold.toml";

pub const TEMPLATES_DIR_NAME: &str = "templates";

pub fn default_templates_root() -> PathBuf {
    install_dir()
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(TEMPLATES_DIR_NAME)
}
