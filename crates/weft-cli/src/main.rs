mod cli;
mod commands;
mod patterns;

use cli::{Cli, Command};
use commands::captures::CapturesArgs;
use commands::dump::DumpArgs;
use commands::matches::MatchArgs;

fn main() {
    env_logger::init();

    let cli = <Cli as clap::Parser>::parse();

    match cli.command {
        Command::Patterns => {
            commands::patterns::run();
        }
        Command::Dump { name, ast, color } => {
            commands::dump::run(DumpArgs {
                name,
                ast,
                color: color.should_colorize(),
            });
        }
        Command::Match { name, input } => {
            commands::matches::run(MatchArgs { name, input });
        }
        Command::Captures { name, input, json } => {
            commands::captures::run(CapturesArgs { name, input, json });
        }
    }
}
