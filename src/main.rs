use clap::CommandFactory;
use fieldtype_scaffold::{
    cli::{get_args, get_log_level_from_verbose, run, Args},
    error::{default_error_handler, Error},
};

fn main() {
    let args = get_args();
    env_logger::Builder::new().filter_level(get_log_level_from_verbose(args.verbose)).init();

    if let Err(err) = run(args) {
        if let Error::MissingOption(_) = err {
            let _ = Args::command().print_help();
            println!();
        }
        default_error_handler(err);
    }
}
