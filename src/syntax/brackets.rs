//! Bracket normalization: `[a b c] = [a [b c]]`.
//!
//! A group written with more than two elements is shorthand for right-nested
//! pairs. Both algorithms below produce the same pairs for well-formed input
//! and reject groups with fewer than two elements.

use std::ops::Range;

use crate::diagnostic::Diagnostic;
use crate::lexeme::Lexeme;
use crate::span::{Span, Spanned};
use crate::syntax::scan::{Body, Expr, Scanner};

/// Which normalization algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BracketMode {
    /// Re-scan the token buffer from the back and apply one rewrite per pass.
    Exact,
    /// Fold every group right-nested in a single descent.
    Quick,
}

/// Rewrite every group of the expression into nested pairs.
pub fn normalize(expr: &Expr, mode: BracketMode) -> Result<Expr, Diagnostic> {
    match mode {
        BracketMode::Exact => exact(expr),
        BracketMode::Quick => quick(expr.clone()),
    }
}

// ─── Exact ─────────────────────────────────────────────────────────

fn exact(expr: &Expr) -> Result<Expr, Diagnostic> {
    let mut tokens = expr.to_tokens();
    let mut passes = 0usize;
    while let Some(rewritten) = rewrite_once(&tokens, 0..tokens.len())? {
        tokens = rewritten;
        passes += 1;
    }
    tracing::trace!(passes, "exact bracket normalization");
    let (normalized, _) = Scanner::new(&tokens).take_front(0)?;
    Ok(normalized)
}

/// Apply the first `[a b c] → [a [b c]]` rewrite found inside `range`.
///
/// Looks at the last element of the group, then the one before it, recursing
/// into each before considering the group itself. Returns `None` when the
/// range is already made of pairs.
fn rewrite_once(
    tokens: &[Spanned<Lexeme>],
    range: Range<usize>,
) -> Result<Option<Vec<Spanned<Lexeme>>>, Diagnostic> {
    let close = range.end - 1;
    if tokens[close].node != Lexeme::RBracket {
        return Ok(None);
    }
    let scanner = Scanner::new(tokens);

    if tokens[close - 1].node == Lexeme::LBracket {
        return Err(too_few(tokens[close - 1].span.merge(tokens[close].span), 0));
    }
    let (_, c_start) = scanner.take_back(close)?;
    if let Some(rewritten) = rewrite_once(tokens, c_start..close)? {
        return Ok(Some(rewritten));
    }

    if tokens[c_start - 1].node == Lexeme::LBracket {
        return Err(too_few(tokens[c_start - 1].span.merge(tokens[close].span), 1));
    }
    let (_, b_start) = scanner.take_back(c_start)?;
    if let Some(rewritten) = rewrite_once(tokens, b_start..c_start)? {
        return Ok(Some(rewritten));
    }

    if tokens[b_start - 1].node == Lexeme::LBracket {
        return Ok(None);
    }

    let inner = tokens[b_start].span.merge(tokens[close - 1].span);
    let mut out = Vec::with_capacity(tokens.len() + 2);
    out.extend_from_slice(&tokens[..b_start]);
    out.push(Spanned::new(Lexeme::LBracket, inner));
    out.extend_from_slice(&tokens[b_start..close]);
    out.push(Spanned::new(Lexeme::RBracket, inner));
    out.extend_from_slice(&tokens[close..]);
    Ok(Some(out))
}

// ─── Quick ─────────────────────────────────────────────────────────

fn quick(expr: Expr) -> Result<Expr, Diagnostic> {
    let Expr {
        prefix,
        body,
        span,
        body_span,
    } = expr;
    let body = match body {
        Body::Atom(value) => Body::Atom(value),
        Body::Group(items) => {
            if items.len() < 2 {
                return Err(too_few(body_span, items.len()));
            }
            let items = items
                .into_iter()
                .map(quick)
                .collect::<Result<Vec<_>, _>>()?;
            let mut rev = items.into_iter().rev();
            let (Some(mut tail), Some(mut head)) = (rev.next(), rev.next()) else {
                return Err(too_few(body_span, 1));
            };
            for next in rev {
                tail = Expr::pair(head, tail);
                head = next;
            }
            Body::Group(vec![head, tail])
        }
    };
    Ok(Expr {
        prefix,
        body,
        span,
        body_span,
    })
}

fn too_few(span: Span, found: usize) -> Diagnostic {
    let what = if found == 0 { "an empty cell" } else { "a cell with one element" };
    Diagnostic::syntax(format!("cannot add brackets to {}", what), span)
        .with_note("a cell needs at least two elements".to_string())
        .with_help("write a pair as [a b]; [a b c] means [a [b c]]".to_string())
}
