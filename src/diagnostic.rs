use crate::span::Span;

/// Where a diagnostic comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// The expression text: lexing, scanning, bracket normalization.
    Syntax,
    /// A switch value, a REPL directive or the settings file. Has no
    /// position in the expression.
    Config,
}

/// A reader or configuration error: what went wrong and where.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub origin: Origin,
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    /// An error at a position in the expression text.
    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            origin: Origin::Syntax,
            message,
            span,
            notes: Vec::new(),
            help: None,
        }
    }

    /// An error in the settings; it points at no source text.
    pub fn config(message: String) -> Self {
        Self {
            origin: Origin::Config,
            message,
            span: Span::dummy(),
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    /// Render the diagnostic to stderr. Syntax errors are drawn over the
    /// expression with ariadne; configuration errors are a single line.
    pub fn render(&self, filename: &str, source: &str) {
        use ariadne::{Color, Label, Report, ReportKind, Source};

        if self.origin == Origin::Config {
            eprintln!("configuration error: {}", self);
            return;
        }

        let range = self.span.start as usize..self.span.end as usize;
        let mut report = Report::build(
            ReportKind::Custom("syntax error", Color::Red),
            filename,
            range.start,
        )
        .with_message(&self.message)
        .with_label(
            Label::new((filename, range))
                .with_message(&self.message)
                .with_color(Color::Red),
        );

        for note in &self.notes {
            report = report.with_note(note);
        }

        if let Some(help) = &self.help {
            report = report.with_help(help);
        }

        if let Err(e) = report
            .finish()
            .eprint((filename, Source::from(source)))
        {
            eprintln!("syntax error: {} ({})", self.message, e);
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        for note in &self.notes {
            write!(f, "; {}", note)?;
        }
        Ok(())
    }
}

/// Render a list of diagnostics.
pub fn render_diagnostics(diagnostics: &[Diagnostic], filename: &str, source: &str) {
    for diag in diagnostics {
        diag.render(filename, source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let span = Span::new(10, 15);
        let d = Diagnostic::syntax("unmatched ']'".to_string(), span);
        assert_eq!(d.message, "unmatched ']'");
        assert_eq!(d.span.start, 10);
        assert_eq!(d.span.end, 15);
        assert!(d.notes.is_empty());
        assert!(d.help.is_none());
    }

    #[test]
    fn test_config_has_no_position() {
        let d = Diagnostic::config("invalid switch value 'maybe'".to_string());
        assert_eq!(d.origin, Origin::Config);
        assert_eq!(d.span, Span::dummy());
        assert_eq!(Diagnostic::syntax("x".to_string(), Span::new(1, 2)).origin, Origin::Syntax);
        // Rendering ignores the source text entirely.
        d.render("<input>", "");
    }

    #[test]
    fn test_with_note() {
        let d = Diagnostic::syntax("error".to_string(), Span::dummy())
            .with_note("remaining input: \"x]\"".to_string())
            .with_note("second".to_string());
        assert_eq!(d.notes.len(), 2);
        assert_eq!(d.notes[0], "remaining input: \"x]\"");
        assert_eq!(d.notes[1], "second");
    }

    #[test]
    fn test_with_help() {
        let d = Diagnostic::syntax("error".to_string(), Span::dummy())
            .with_help("write it as [a b]".to_string());
        assert_eq!(d.help.as_deref(), Some("write it as [a b]"));
    }

    #[test]
    fn test_display_includes_notes() {
        let d = Diagnostic::syntax("bad value".to_string(), Span::dummy())
            .with_note("expected on or off".to_string());
        assert_eq!(d.to_string(), "bad value; expected on or off");
    }

    #[test]
    fn test_render_does_not_panic() {
        let source = "*[42 [4 0 1]";
        let d = Diagnostic::syntax("unclosed '['".to_string(), Span::new(1, 2))
            .with_help("add a matching ']'".to_string());
        d.render("<input>", source);
    }

    #[test]
    fn test_render_diagnostics_multiple() {
        let source = "*[1 @ 2 #]";
        let diagnostics = vec![
            Diagnostic::syntax("unexpected character '@'".to_string(), Span::new(4, 5)),
            Diagnostic::syntax("unexpected character '#'".to_string(), Span::new(8, 9)),
        ];
        render_diagnostics(&diagnostics, "<input>", source);
    }
}
