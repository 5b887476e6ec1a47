use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The template name does not resolve to a directory under the templates root.
    #[error("{0} is not a valid directory.")]
    InvalidTemplate(String),

    /// The destination already holds at least one entry.
    #[error("Destination directory is not empty. Operation aborted to prevent overwriting.")]
    DestinationNotEmpty(PathBuf),

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error(transparent)]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
