//! Library entry points: read a source line, evaluate it.

use tracing::debug;

use crate::config::Settings;
use crate::diagnostic::Diagnostic;
use crate::engine::{Engine, Evaluation, Term};
use crate::lexeme::{Lexeme, Operator};
use crate::lexer::Lexer;
use crate::syntax::brackets::normalize;
use crate::syntax::scan::{Expr, Scanner};

#[cfg(test)]
mod tests;

/// Lex, scan and bracket-normalize one expression.
///
/// An expression that does not start with an operator is read as `*expr`.
/// Anything after the first complete expression is an error.
pub fn read(source: &str, settings: &Settings) -> Result<Expr, Vec<Diagnostic>> {
    let (tokens, lex_errors) = Lexer::new(source).tokenize();
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }

    let scanner = Scanner::new(&tokens);
    let (expr, next) = scanner.take_front(0).map_err(|e| vec![e])?;
    if let Some(extra) = scanner.token(next) {
        let message = match extra.node {
            Lexeme::RBracket => "unmatched ']'".to_string(),
            _ => format!("unexpected {} after the expression", extra.node.description()),
        };
        return Err(vec![Diagnostic::syntax(message, extra.span)
            .with_help("a line holds exactly one expression".to_string())]);
    }

    let expr = if expr.prefix.is_empty() {
        expr.with_operator(Operator::Apply)
    } else {
        expr
    };

    let normalized = normalize(&expr, settings.bracket_mode()).map_err(|e| vec![e])?;
    debug!(mode = ?settings.bracket_mode(), "read {}", normalized);
    Ok(normalized)
}

/// Read `source` into a term ready for reduction.
pub fn parse(source: &str, settings: &Settings) -> Result<Term, Vec<Diagnostic>> {
    let expr = read(source, settings)?;
    Term::from_expr(&expr).map_err(|e| vec![e])
}

/// Evaluate with the default settings.
pub fn evaluate(source: &str) -> Result<Evaluation, Vec<Diagnostic>> {
    evaluate_with(source, &Settings::default())
}

pub fn evaluate_with(source: &str, settings: &Settings) -> Result<Evaluation, Vec<Diagnostic>> {
    let term = parse(source, settings)?;
    Ok(Engine::new(*settings).evaluate(term))
}
