mod cli;

use clap::{Parser, Subcommand};

use cli::eval::EvalArgs;
use cli::repl::ReplArgs;

#[derive(Parser)]
#[command(
    name = "nock",
    version,
    about = "Nock 5K evaluator: nouns in, nouns out."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate one expression and print its product
    Eval(EvalArgs),
    /// Start an interactive session
    Repl(ReplArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Eval(args) => cli::eval::cmd_eval(args),
        Command::Repl(args) => cli::repl::cmd_repl(args),
    }
}
