use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Creates each file under `root` with its own relative path as content.
pub fn build_tree(root: &Path, files: &[&str]) {
    fs::create_dir_all(root).unwrap();
    for file in files {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, file).unwrap();
    }
}

/// Creates each `(path, content)` pair under `root`.
pub fn build_tree_with_content(root: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(root).unwrap();
    for (file, content) in files {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
    }
}

/// Lines of the receipt at `path`, without terminators.
pub fn receipt_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path).unwrap().lines().map(str::to_string).collect()
}

/// The receipt line for a rename from `source` to `target`.
pub fn receipt_line(source: &Path, target: &Path) -> String {
    format!("Renamed '{}' to '{}'", source.display(), target.display())
}

/// Every file under `root`, relative to it and sorted.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| !e.file_type().is_dir())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Prints the files present in only one of the two directories.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = list_files(actual);
    let expected_files = list_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual:   {:?}", actual);
    println!("Expected: {:?}", expected);
    for file in actual_files.iter().filter(|f| !expected_files.contains(f)) {
        println!("  + {:?}", file);
    }
    for file in expected_files.iter().filter(|f| !actual_files.contains(f)) {
        println!("  - {:?}", file);
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that both trees hold the same files with the same content.
pub fn assert_trees_match(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
