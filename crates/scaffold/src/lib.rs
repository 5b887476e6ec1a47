//! Copy a named template directory into a destination that is absent or empty.

pub mod config;
pub mod error;
pub mod template;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use template::{Templates, copy_template};
pub use utils::fs::{copy_dir_all, is_non_empty_dir};
