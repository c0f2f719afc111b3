pub mod args;
pub mod prompt;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, print_help_and_exit, Args};
pub use runner::{run, Runner};
