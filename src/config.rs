//! Run configuration.
//!
//! [`NormalizerConfig`] is the explicit configuration handed to the
//! normalizer. [`ConfigFile`] is its optional on-disk form, loaded from JSON
//! or YAML and merged under the command line.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_EXTENSIONS, DEFAULT_RECEIPT_FILE, DEFAULT_TARGET_EXTENSION};
use crate::error::{Error, Result};

/// What to do when the computed name of a file is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Stop the run before touching the existing entry.
    #[default]
    Fail,
    /// Replace the existing entry, as a plain rename would.
    Overwrite,
}

impl Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CollisionPolicy::Fail => "fail",
            CollisionPolicy::Overwrite => "overwrite",
        };
        write!(f, "{s}")
    }
}

/// Everything one normalizer run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    pub root_directory: PathBuf,
    pub receipt_file: PathBuf,
    pub target_extension: String,
    pub on_collision: CollisionPolicy,
    pub dry_run: bool,
}

impl NormalizerConfig {
    /// Builds a config with the default collision policy and dry run off.
    pub fn new<R, P>(root_directory: R, receipt_file: P, target_extension: &str) -> Self
    where
        R: Into<PathBuf>,
        P: Into<PathBuf>,
    {
        Self {
            root_directory: root_directory.into(),
            receipt_file: receipt_file.into(),
            target_extension: target_extension.to_string(),
            on_collision: CollisionPolicy::default(),
            dry_run: false,
        }
    }

    pub fn with_collision_policy(mut self, on_collision: CollisionPolicy) -> Self {
        self.on_collision = on_collision;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rejects target extensions that would move a file out of its directory.
    pub fn validate(&self) -> Result<()> {
        if self.target_extension.chars().any(std::path::is_separator) {
            return Err(Error::InvalidTargetExtension(self.target_extension.clone()));
        }
        Ok(())
    }
}

/// On-disk configuration. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub root_directory: Option<PathBuf>,
    pub receipt_file: Option<PathBuf>,
    pub target_extension: Option<String>,
    pub on_collision: Option<CollisionPolicy>,
    pub dry_run: Option<bool>,
}

impl ConfigFile {
    /// Loads a config file, choosing the format from its extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        let config: ConfigFile = match extension {
            "json" => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            "yaml" | "yml" => serde_yaml::from_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(Error::ConfigFormat {
                    path: path.display().to_string(),
                    extensions: CONFIG_EXTENSIONS.join(", "),
                })
            }
        };

        log::debug!("Loaded config from '{}': {:?}", path.display(), config);
        Ok(config)
    }

    /// Fills every key the file leaves out with its default.
    ///
    /// The root directory has no default and must come from somewhere.
    pub fn resolve(self) -> Result<NormalizerConfig> {
        let root_directory = self.root_directory.ok_or(Error::MissingRootDirectory)?;
        Ok(NormalizerConfig {
            root_directory,
            receipt_file: self
                .receipt_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RECEIPT_FILE)),
            target_extension: self
                .target_extension
                .unwrap_or_else(|| DEFAULT_TARGET_EXTENSION.to_string()),
            on_collision: self.on_collision.unwrap_or_default(),
            dry_run: self.dry_run.unwrap_or(false),
        })
    }
}
