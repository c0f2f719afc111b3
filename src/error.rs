use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The traversal root is missing or is not a directory.
    #[error("Cannot proceed: root directory '{path}' does not exist or is not a directory.")]
    NotFound { path: String },

    /// The receipt could not be opened, written or flushed.
    #[error("Cannot write receipt '{path}'. Original error: {e}")]
    Receipt { path: String, e: std::io::Error },

    /// A rename failed part way through the run. Earlier renames are kept.
    #[error("Failed to rename '{source_path}' to '{target_path}'. Original error: {e}")]
    Rename { source_path: String, target_path: String, e: std::io::Error },

    #[error("Cannot rename '{source_path}': '{target_path}' already exists. Use --on-collision=overwrite to replace it.")]
    Collision { source_path: String, target_path: String },

    #[error("Failed to walk directory tree. Original error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid target extension '{0}': it must not contain a path separator.")]
    InvalidTargetExtension(String),

    #[error("Failed to parse JSON config. Original error: {0}")]
    ConfigParseJson(#[from] serde_json::Error),

    #[error("Failed to parse YAML config. Original error: {0}")]
    ConfigParseYaml(#[from] serde_yaml::Error),

    #[error("Unsupported config file '{path}'. Expected one of: {extensions}.")]
    ConfigFormat { path: String, extensions: String },

    #[error("No root directory given on the command line or in the config file.")]
    MissingRootDirectory,

    #[error("Prompt failed. Original error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl Error {
    /// True for the missing-root error kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// True for every error kind caused by a failing filesystem call.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Error::IoError(_) | Error::Receipt { .. } | Error::Rename { .. } | Error::Walk(_)
        )
    }
}

/// Convenience type alias for Results with extnorm's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
