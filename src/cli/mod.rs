pub mod eval;
pub mod repl;

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args};
use nock::config::{Settings, Switch};

/// Flags shared by every subcommand.
#[derive(Args)]
pub struct SettingsArgs {
    /// Expand macros 6–10 into their defining formulas (on|off)
    #[arg(long, value_name = "on|off")]
    pub strict: Option<String>,
    /// Normalize brackets in one pass instead of token rewrites (on|off)
    #[arg(long, value_name = "on|off")]
    pub quick_brackets: Option<String>,
    /// Settings file (default: nock.toml in the current directory or above)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Log every axiom applied; repeat to also log every term
    #[arg(short, long, action = ArgAction::Count)]
    pub trace: u8,
}

fn load_settings(path: &Path) -> Settings {
    match Settings::load(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

/// Defaults, then the settings file, then command-line flags.
pub fn resolve_settings(args: &SettingsArgs) -> Settings {
    let file = match &args.config {
        Some(path) => Some(path.clone()),
        None => std::env::current_dir()
            .ok()
            .and_then(|dir| Settings::find(&dir)),
    };
    let mut settings = match file {
        Some(path) => load_settings(&path),
        None => Settings::default(),
    };

    for (switch, value) in [
        (Switch::Strict, &args.strict),
        (Switch::QuickBrackets, &args.quick_brackets),
    ] {
        if let Some(value) = value {
            if let Err(e) = settings.set(switch, value) {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    }
    settings
}

/// Install a stderr subscriber when `--trace` was given.
pub fn init_tracing(level: u8) {
    let max_level = match level {
        0 => return,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
