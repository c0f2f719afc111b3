/// Handles argument parsing and the command-line entry point.
pub mod cli;

/// Run configuration and config file loading.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Recursive walk and rename of a directory tree.
pub mod normalizer;

/// A single planned rename.
pub mod operation;

/// The audit log written during a run.
pub mod receipt;

pub use config::{CollisionPolicy, NormalizerConfig};
pub use normalizer::{normalize, ExtensionNormalizer, RenamePlan, RunSummary};
