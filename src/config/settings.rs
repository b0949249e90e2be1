use std::path::{Path, PathBuf};

use crate::diagnostic::Diagnostic;
use crate::syntax::brackets::BracketMode;

/// Name of the settings file looked up by [`Settings::find`].
pub const SETTINGS_FILE: &str = "nock.toml";

/// Evaluation settings, owned by the caller and copied into each engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Expand macros 6–10 into their defining formulas.
    pub strict: bool,
    /// Normalize brackets with one tree fold instead of token rewrites.
    pub quick_brackets: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict: true,
            quick_brackets: true,
        }
    }
}

/// A setting that can be switched on or off by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Switch {
    Strict,
    QuickBrackets,
}

impl Switch {
    /// Accepts the directive names (`strict`, `qb`) and the file key
    /// `quick_brackets`, in any case.
    pub fn from_key(key: &str) -> Option<Switch> {
        match key.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Switch::Strict),
            "qb" | "quick_brackets" | "quick-brackets" => Some(Switch::QuickBrackets),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Switch::Strict => "Strict",
            Switch::QuickBrackets => "Quick brackets",
        }
    }
}

/// Parse `true|yes|on` or `false|no|off`, case-insensitively.
pub fn parse_switch(value: &str) -> Result<bool, Diagnostic> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        other => Err(Diagnostic::config(format!("invalid switch value '{}'", other))
            .with_help("use one of: true, yes, on, false, no, off".to_string())),
    }
}

/// A REPL line of the form `strict=<value>` or `qb=<value>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Directive {
    pub switch: Switch,
    pub value: bool,
}

impl Directive {
    /// `None` when the line is not a directive at all; an error when it
    /// names a switch but carries an invalid value.
    pub fn parse(line: &str) -> Option<Result<Directive, Diagnostic>> {
        let (key, value) = line.trim().split_once('=')?;
        let switch = match key.to_ascii_lowercase().as_str() {
            "strict" => Switch::Strict,
            "qb" => Switch::QuickBrackets,
            _ => return None,
        };
        let parsed = parse_switch(value).map_err(|e| {
            Diagnostic::config(format!(
                "invalid value for {}: '{}'",
                switch.label().to_lowercase(),
                value.trim()
            ))
            .with_help(e.help.unwrap_or_default())
        });
        Some(parsed.map(|value| Directive { switch, value }))
    }
}

impl Settings {
    /// Quick brackets are used unless they are off and strict mode is on.
    pub fn bracket_mode(&self) -> BracketMode {
        if self.quick_brackets || !self.strict {
            BracketMode::Quick
        } else {
            BracketMode::Exact
        }
    }

    pub fn switch(&mut self, switch: Switch, on: bool) {
        match switch {
            Switch::Strict => self.strict = on,
            Switch::QuickBrackets => self.quick_brackets = on,
        }
    }

    /// Set a switch from its textual value. An invalid value leaves the
    /// setting unchanged.
    pub fn set(&mut self, switch: Switch, value: &str) -> Result<(), Diagnostic> {
        let on = parse_switch(value)?;
        self.switch(switch, on);
        Ok(())
    }

    /// Load settings from a nock.toml file, on top of the defaults.
    pub fn load(path: &Path) -> Result<Settings, Diagnostic> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Diagnostic::config(format!("cannot read '{}': {}", path.display(), e))
        })?;

        let mut settings = Settings::default();
        let mut current_section = String::new();

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') || trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                current_section = trimmed[1..trimmed.len() - 1].trim().to_string();
                continue;
            }
            if current_section != "settings" {
                continue;
            }
            if let Some((key, value)) = trimmed.split_once('=') {
                let Some(switch) = Switch::from_key(key.trim_matches('"')) else {
                    continue;
                };
                let value = value.trim().trim_matches('"');
                settings.set(switch, value).map_err(|e| {
                    e.with_note(format!("in '{}', line {}", path.display(), index + 1))
                })?;
            }
        }

        Ok(settings)
    }

    /// Try to find a nock.toml in the given directory or its ancestors.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(SETTINGS_FILE);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}
