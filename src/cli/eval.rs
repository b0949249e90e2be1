use std::process;

use clap::Args;
use nock::diagnostic::render_diagnostics;
use nock::Evaluation;

use super::{init_tracing, resolve_settings, SettingsArgs};

#[derive(Args)]
pub struct EvalArgs {
    /// Expression to evaluate; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub expr: Vec<String>,
    #[command(flatten)]
    pub settings: SettingsArgs,
}

pub fn cmd_eval(args: EvalArgs) {
    init_tracing(args.settings.trace);
    let settings = resolve_settings(&args.settings);
    let source = args.expr.join(" ");

    match nock::evaluate_with(&source, &settings) {
        Ok(Evaluation::Product(noun)) => println!("{}", noun),
        Ok(Evaluation::Crash(crash)) => {
            println!("CRASH");
            eprintln!("crash: {}", crash);
            process::exit(1);
        }
        Err(errors) => {
            render_diagnostics(&errors, "<expr>", &source);
            process::exit(1);
        }
    }
}
