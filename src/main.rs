mod cli;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    if let Err(error) = stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
    {
        eprintln!("Unable to initialize logging: {error}");
    }

    // Reported regardless of `-q`.
    if let Err(error) = cli::run(&args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
