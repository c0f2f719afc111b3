//! Recursive extension normalization.
//!
//! A run has two phases. The tree under the root is walked once to build a
//! [`RenamePlan`], then each planned [`RenameOperation`] is applied in walk
//! order and recorded in the [`Receipt`]. Renames are irreversible: if the
//! run stops early, everything renamed before the failure stays renamed and
//! is listed in the receipt.

use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::{CollisionPolicy, NormalizerConfig};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::operation::RenameOperation;
use crate::receipt::Receipt;

/// Outcome of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files renamed, or that would be renamed in a dry run. Matches the
    /// number of receipt lines.
    pub renamed: usize,
    /// Files whose name already ends in the target extension.
    pub unchanged: usize,
    /// Entries deliberately left alone: the receipt itself, dangling
    /// symlinks and special files.
    pub skipped: usize,
    pub dry_run: bool,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.dry_run { "would be renamed" } else { "renamed" };
        write!(
            f,
            "{} file(s) {}, {} already normalized, {} skipped",
            self.renamed, verb, self.unchanged, self.skipped
        )
    }
}

/// Renames computed by walking the tree, before any of them is applied.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenamePlan {
    pub operations: Vec<RenameOperation>,
    pub unchanged: usize,
    pub skipped: usize,
}

enum EntryKind {
    Directory,
    File,
    Skip(&'static str),
}

pub struct ExtensionNormalizer {
    config: NormalizerConfig,
}

impl ExtensionNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Renames every file under the root to the target extension.
    ///
    /// The root is checked before the receipt is created, and the receipt is
    /// created before anything is renamed. Partial completion is possible:
    /// on error, the receipt lists every rename done up to the failure.
    pub fn normalize(&self) -> Result<RunSummary> {
        self.config.validate()?;
        self.check_root()?;

        if self.config.dry_run {
            let plan = self.plan()?;
            for operation in &plan.operations {
                log::info!("{}", operation.get_message(true));
            }
            return Ok(RunSummary {
                renamed: plan.operations.len(),
                unchanged: plan.unchanged,
                skipped: plan.skipped,
                dry_run: true,
            });
        }

        let mut receipt = Receipt::create(&self.config.receipt_file)?;
        let plan = self.plan()?;

        for operation in &plan.operations {
            self.apply(operation, &mut receipt)?;
        }

        let renamed = receipt.finish()?;
        Ok(RunSummary {
            renamed,
            unchanged: plan.unchanged,
            skipped: plan.skipped,
            dry_run: false,
        })
    }

    /// Walks the tree and computes the renames without touching anything.
    ///
    /// Entries are visited top-down, sorted by file name within each
    /// directory. Under [`CollisionPolicy::Fail`] a plan whose target is
    /// already taken, on disk or by an earlier operation, is rejected here.
    /// A target naming the receipt is rejected under every policy.
    pub fn plan(&self) -> Result<RenamePlan> {
        self.check_root()?;

        let receipt = self.receipt_identity();
        let mut plan = RenamePlan::default();
        let mut targets: HashSet<PathBuf> = HashSet::new();

        for dir_entry in WalkDir::new(&self.config.root_directory).sort_by_file_name() {
            let entry = dir_entry?;
            let path = entry.path();
            log::trace!("Visiting '{}'", path.display());

            match classify(&entry) {
                EntryKind::Directory => continue,
                EntryKind::Skip(reason) => {
                    log::debug!("Skipping '{}' ({reason})", path.display());
                    plan.skipped += 1;
                    continue;
                }
                EntryKind::File => {}
            }

            if is_receipt(path, receipt.as_deref()) {
                log::debug!("Skipping '{}' (receipt of this run)", path.display());
                plan.skipped += 1;
                continue;
            }

            let Some(target) = path.replace_extension(&self.config.target_extension) else {
                plan.skipped += 1;
                continue;
            };

            if target == path {
                log::debug!("'{}' is already normalized", path.display());
                plan.unchanged += 1;
                continue;
            }

            // Replacing the receipt would silently drop every later line.
            if is_receipt(&target, receipt.as_deref()) {
                return Err(collision(path, &target));
            }

            let target_exists = target.symlink_metadata().is_ok() || targets.contains(&target);
            if target_exists && self.config.on_collision == CollisionPolicy::Fail {
                return Err(collision(path, &target));
            }

            targets.insert(target.clone());
            plan.operations.push(RenameOperation::new(path.to_path_buf(), target, target_exists));
        }

        log::debug!(
            "Planned {} rename(s) under '{}'",
            plan.operations.len(),
            self.config.root_directory.display()
        );
        Ok(plan)
    }

    fn apply(&self, operation: &RenameOperation, receipt: &mut Receipt) -> Result<()> {
        // The tree may have changed since the plan was built.
        if self.config.on_collision == CollisionPolicy::Fail
            && operation.target.symlink_metadata().is_ok()
        {
            return Err(collision(&operation.source, &operation.target));
        }

        fs::rename(&operation.source, &operation.target).map_err(|e| Error::Rename {
            source_path: operation.source.display().to_string(),
            target_path: operation.target.display().to_string(),
            e,
        })?;
        receipt.record(operation)?;

        log::info!("{}", operation.get_message(false));
        Ok(())
    }

    fn check_root(&self) -> Result<()> {
        let root = &self.config.root_directory;
        match fs::metadata(root) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            _ => Err(Error::NotFound { path: root.display().to_string() }),
        }
    }

    /// Absolute path of the receipt, resolved through its parent directory.
    fn receipt_identity(&self) -> Option<PathBuf> {
        let receipt = &self.config.receipt_file;
        let file_name = receipt.file_name()?;
        canonical_parent(receipt).map(|parent| parent.join(file_name))
    }
}

/// Normalizes `root_directory` with the default collision policy.
pub fn normalize<R, P>(
    root_directory: R,
    receipt_path: P,
    target_extension: &str,
) -> Result<RunSummary>
where
    R: Into<PathBuf>,
    P: Into<PathBuf>,
{
    let config = NormalizerConfig::new(root_directory, receipt_path, target_extension);
    ExtensionNormalizer::new(config).normalize()
}

fn classify(entry: &DirEntry) -> EntryKind {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        // The link itself is renamed; directories behind links are not entered.
        match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Skip("symlink to a directory"),
            Err(_) => EntryKind::Skip("dangling symlink"),
        }
    } else {
        EntryKind::Skip("not a regular file")
    }
}

fn is_receipt(path: &Path, receipt: Option<&Path>) -> bool {
    let Some(receipt) = receipt else {
        return false;
    };
    if path.file_name() != receipt.file_name() {
        return false;
    }
    match (canonical_parent(path), path.file_name()) {
        (Some(parent), Some(file_name)) => parent.join(file_name) == receipt,
        _ => false,
    }
}

fn canonical_parent(path: &Path) -> Option<PathBuf> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    parent.canonicalize().ok()
}

fn collision(source: &Path, target: &Path) -> Error {
    Error::Collision {
        source_path: source.display().to_string(),
        target_path: target.display().to_string(),
    }
}
