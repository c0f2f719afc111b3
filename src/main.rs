use extnorm::{
    cli::{get_args, get_log_level_from_verbose, print_help_and_exit, run},
    error::{default_error_handler, Error},
};

fn main() {
    let args = get_args();
    let log_level = get_log_level_from_verbose(args.verbose);
    env_logger::Builder::new().filter_level(log_level).init();

    match run(args) {
        Ok(()) => {}
        Err(Error::MissingRootDirectory) => {
            eprintln!("{}", Error::MissingRootDirectory);
            print_help_and_exit();
        }
        Err(err) => default_error_handler(err),
    }
}
