//! The audit trail of one run.
//!
//! A [`Receipt`] is opened before the first rename and flushed after every
//! line, so the file on disk always lists exactly the renames completed so
//! far, even when the run stops with an error.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::operation::RenameOperation;

pub struct Receipt {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: usize,
}

impl Receipt {
    /// Creates the receipt at `path`, truncating any previous content.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| Error::Receipt {
            path: path.display().to_string(),
            e,
        })?;
        log::debug!("Opened receipt '{}'", path.display());
        Ok(Self { path, writer: BufWriter::new(file), lines: 0 })
    }

    /// Number of lines recorded so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Appends one rename and flushes it to disk.
    pub fn record(&mut self, operation: &RenameOperation) -> Result<()> {
        writeln!(self.writer, "{}", operation.receipt_line())
            .and_then(|_| self.writer.flush())
            .map_err(|e| self.error(e))?;
        self.lines += 1;
        Ok(())
    }

    /// Flushes and syncs the receipt, then releases the handle.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().map_err(|e| self.error(e))?;
        self.writer.get_ref().sync_all().map_err(|e| self.error(e))?;
        log::debug!("Closed receipt '{}' with {} line(s)", self.path.display(), self.lines);
        Ok(self.lines)
    }

    fn error(&self, e: std::io::Error) -> Error {
        Error::Receipt { path: self.path.display().to_string(), e }
    }
}
