//! wordblend binary entry point

use clap::Parser;

use wordblend_cli::args::Args;

fn main() {
    let args = Args::parse();
    args.init_logging();

    if let Err(err) = wordblend_cli::run(&args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
