use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Error reading [{}] file: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No element with id '{id}' in [{}]", .path.display())]
    TargetNotFound { id: String, path: PathBuf },

    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("Error reading config [{}]: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing config [{}]: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Error writing [{}] file: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FinderError>;
