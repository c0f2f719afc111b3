//! Constants used throughout extnorm

/// Receipt written when no path is configured
pub const DEFAULT_RECEIPT_FILE: &str = "receipt.txt";

/// Extension every file is normalized to by default
pub const DEFAULT_TARGET_EXTENSION: &str = ".txt";

/// Prefix for console messages emitted during a dry run
pub const DRY_RUN_PREFIX: &str = "[DRY RUN] ";

/// Config file extensions understood by the loader
pub const CONFIG_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
