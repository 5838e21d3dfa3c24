use clap::Parser;

use coverage_guard::cli::{Cli, Commands};
use coverage_guard::commands::{run_check, run_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
