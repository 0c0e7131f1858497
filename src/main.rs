use std::process;

use clap::Parser;
use env_logger::Env;

use topk_select::args::Args;
use topk_select::config::Config;

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    // bind arguments to a Config struct
    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not parse arguments: {err}");
        process::exit(1);
    });

    if let Err(e) = topk_select::run(config) {
        eprintln!("Fatal Error: {e}");
        process::exit(1);
    }
}
