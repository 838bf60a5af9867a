mod anchor_cmd;
mod cli;
mod config;
mod input;
mod logging;
mod weekday_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Weekday(args) => weekday_cmd::run(args),
        Command::Anchor(args) => anchor_cmd::run(args),
    }
}
