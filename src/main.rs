use clap::Parser;
use hindsight::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
