use clap::Parser;

use ypages::{run, RunPaths};

mod cli;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let paths = RunPaths {
        directory: cli.directory,
        replica: cli.replica,
        sorted: cli.sorted,
        queries: cli.queries,
        results: cli.results,
    };

    if let Err(e) = run(&paths) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
