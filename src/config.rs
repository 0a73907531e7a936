use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use growpack::Heuristic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sort::SortOrder;

static CONFIG_FILENAME: &str = "sheetpack.toml";

/// Configuration for Sheetpack, contained in a sheetpack.toml file.
///
/// Every field is optional. Options given on the command line take
/// precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// Images or folders of images to pack, used when none are given on the
    /// command line.
    #[serde(default)]
    pub inputs: Vec<PathBuf>,

    /// Where the packed spritesheet should be written.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Whether to round the spritesheet's dimensions up to powers of two.
    #[serde(default)]
    pub pow2: Option<bool>,

    /// If specified, a C header describing the layout is written here.
    #[serde(default)]
    pub header: Option<PathBuf>,

    /// If specified, the layout is written here as JSON.
    #[serde(default)]
    pub json: Option<PathBuf>,

    #[serde(default)]
    pub sort: Option<SortOrder>,

    #[serde(default)]
    pub heuristic: Option<Heuristic>,

    /// The path that this config came from. Paths from this config are
    /// relative to the folder containing this file.
    #[serde(skip)]
    pub file_path: PathBuf,
}

impl Config {
    pub fn read_from_folder_or_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;

        if meta.is_file() {
            Self::read_from_file(path)
        } else {
            Self::read_from_folder(path)
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, ConfigError> {
        let folder_path = folder_path.as_ref();
        let file_path = &folder_path.join(CONFIG_FILENAME);

        Self::read_from_file(file_path)
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read(path)?;

        let mut config: Self = toml::from_slice(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        config.file_path = path.to_owned();

        log::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// The path that paths in this Config should be considered relative to.
    pub fn folder(&self) -> &Path {
        self.file_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Resolves a path from this config against the config's folder.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.folder().join(path)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ConfigError {
    /// Tells whether this ConfigError originated because of a path not
    /// existing.
    ///
    /// This is intended for use with methods like `Config::read_from_folder` in
    /// order to avoid needing to check if a file with the right name exists.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io(source) => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
