use std::io::{self, BufRead, Write};
use std::process;

use clap::Args;
use nock::config::{Directive, Settings};
use nock::diagnostic::render_diagnostics;

use super::{init_tracing, resolve_settings, SettingsArgs};

#[derive(Args)]
pub struct ReplArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

pub fn cmd_repl(args: ReplArgs) {
    init_tracing(args.settings.trace);
    let mut settings = resolve_settings(&args.settings);

    println!(
        "Nock ver. 5K; nock-eval ver. {}",
        env!("CARGO_PKG_VERSION")
    );
    println!("Control-D to exit");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_session(stdin.lock(), &mut stdout.lock(), &mut settings) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Read lines until end of input. Directives change `settings` for the
/// lines that follow; every other non-empty line is evaluated.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    settings: &mut Settings,
) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            respond(line, out, settings)?;
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)
}

fn respond<W: Write>(line: &str, out: &mut W, settings: &mut Settings) -> io::Result<()> {
    if let Some(directive) = Directive::parse(line) {
        return match directive {
            Ok(Directive { switch, value }) => {
                settings.switch(switch, value);
                let state = if value { "ON" } else { "OFF" };
                writeln!(out, "{} is now {}", switch.label(), state)
            }
            Err(e) => writeln!(out, "error: {}", e),
        };
    }

    match nock::evaluate_with(line, settings) {
        Ok(evaluation) => writeln!(out, "{}", evaluation),
        Err(errors) => {
            render_diagnostics(&errors, "<repl>", line);
            for e in &errors {
                writeln!(out, "error: {}", e)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> (String, Settings) {
        let mut settings = Settings::default();
        let mut out = Vec::new();
        run_session(input.as_bytes(), &mut out, &mut settings).unwrap();
        (String::from_utf8(out).unwrap(), settings)
    }

    #[test]
    fn test_session_evaluates_lines() {
        let (out, _) = session("*[42 [4 0 1]]\n\n  +[1 2]  \n");
        assert_eq!(out, "> 43\n> > CRASH\n> \n");
    }

    #[test]
    fn test_directives_persist() {
        let (out, settings) = session("strict=off\nQB=no\n[42 [7 [4 0 1] [4 0 1]]]\n");
        assert!(out.contains("Strict is now OFF"));
        assert!(out.contains("Quick brackets are now OFF"));
        assert!(out.contains("> 44\n"));
        assert!(!settings.strict);
        assert!(!settings.quick_brackets);
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let (out, settings) = session("strict=maybe\n*[1 2\n+1\n");
        assert!(out.contains("error: invalid value for strict"));
        assert!(out.contains("error: unclosed '['"));
        assert!(out.ends_with("> 2\n> \n"));
        assert!(settings.strict);
    }
}
