//! geoquery CLI binary.

use clap::Parser;
use geoquery::cli::{args::*, commands::*};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = GeoQueryArgs::parse();

    // RUST_LOG still wins over the verbosity flags
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
