use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension trait for Path to compute normalized file names
pub trait PathExt {
    /// Replaces the last extension of the final path segment with `extension`.
    ///
    /// The extension is everything from the last `.` of the file name onward,
    /// ignoring any leading dots, so `.bashrc` and `..config` keep their
    /// whole name. The new extension is appended verbatim: pass `".txt"` to
    /// get `name.txt`, or `""` to drop the extension and its dot.
    ///
    /// Returns `None` for paths without a file name, such as `/` or `..`.
    ///
    /// # Examples
    /// ```
    /// use extnorm::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("data/archive.tar.gz");
    /// assert_eq!(
    ///     path.replace_extension(".txt").unwrap(),
    ///     Path::new("data/archive.tar.txt")
    /// );
    /// ```
    fn replace_extension(&self, extension: &str) -> Option<PathBuf>;
}

impl PathExt for Path {
    fn replace_extension(&self, extension: &str) -> Option<PathBuf> {
        let stem = match self.file_name()?.to_str() {
            Some(name) => OsString::from(file_stem(name)),
            None => self.file_stem()?.to_os_string(),
        };
        let mut file_name = OsString::with_capacity(stem.len() + extension.len());
        file_name.push(stem);
        file_name.push(extension);
        Some(self.with_file_name(file_name))
    }
}

/// `name` without its extension. Leading dots never start one, so
/// `..config` is its own stem.
fn file_stem(name: &str) -> &str {
    let body = name.trim_start_matches('.');
    let leading = name.len() - body.len();
    match body.rfind('.') {
        Some(dot) => &name[..leading + dot],
        None => name,
    }
}
