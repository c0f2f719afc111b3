use std::path::PathBuf;

use crate::constants::DRY_RUN_PREFIX;

/// A single planned rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Whether something already occupied `target` when the plan was built.
    pub target_exists: bool,
}

impl RenameOperation {
    pub fn new(source: PathBuf, target: PathBuf, target_exists: bool) -> Self {
        Self { source, target, target_exists }
    }

    /// The line recorded in the receipt, without the line terminator.
    ///
    /// The shape is fixed so that downstream parsers can rely on it:
    /// `Renamed '<source>' to '<target>'`.
    pub fn receipt_line(&self) -> String {
        format!("Renamed '{}' to '{}'", self.source.display(), self.target.display())
    }

    /// Gets a message describing the operation for the console log.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { DRY_RUN_PREFIX } else { "" };

        if self.target_exists {
            format!("{}{} (overwriting existing file)", prefix, self.receipt_line())
        } else {
            format!("{}{}", prefix, self.receipt_line())
        }
    }
}
