use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FinderError, Result};

/// Charset every document is decoded with, whatever the document declares.
pub const CHARSET: &str = "utf8";

pub const TARGET_ELEMENT_ID: &str = "make-everything-ok-button";
pub const TAG_SEPARATOR: &str = " > ";
pub const OUTPUT_FILE_PATH: &str = "./comparison_output.txt";

pub const HREF_PATTERN: &str = "^#.*ok.*$";
pub const CLASS_PATTERN: &str = "^btn.*$";
pub const TITLE_PATTERN: &str = "^.*Make-Button.*$";

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "element_finder_config.toml";

/// Process-wide settings, built once in `main` and handed to each component.
///
/// The three heuristic patterns are fixed: they are readable here so the
/// matcher does not hardcode them, but neither the config file nor the CLI can
/// change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub target_id: String,
    pub separator: String,
    pub href_pattern: String,
    pub title_pattern: String,
    pub class_pattern: String,
    pub output_path: PathBuf,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            target_id: TARGET_ELEMENT_ID.to_string(),
            separator: TAG_SEPARATOR.to_string(),
            href_pattern: HREF_PATTERN.to_string(),
            title_pattern: TITLE_PATTERN.to_string(),
            class_pattern: CLASS_PATTERN.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE_PATH),
        }
    }
}

/// The overridable subset, as read from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub target_id: Option<String>,
    pub output_path: Option<PathBuf>,
}

impl FileConfig {
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| FinderError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path`. When `required` is false a missing file yields an empty config.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(FinderError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl FinderConfig {
    /// Defaults, then the file, then explicit command-line values.
    pub fn layered(file: FileConfig, target_id: Option<String>, output_path: Option<PathBuf>) -> Self {
        let mut config = Self::default();

        if let Some(id) = target_id.or(file.target_id) {
            config.target_id = id;
        }
        if let Some(path) = output_path.or(file.output_path) {
            config.output_path = path;
        }

        config
    }
}
