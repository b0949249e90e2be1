//! Sub-expression boundary scanning over an immutable token buffer.
//!
//! An expression is any number of operator prefixes followed by either an
//! atom or a bracketed group. Groups are scanned with whatever arity they
//! were written with; `[1 2 3]` is a three-element group here; resolving it
//! into nested pairs is the job of [`crate::syntax::brackets`].
//!
//! Two dual entry points walk the buffer with cursors:
//! - [`Scanner::take_front`] reads the expression starting at a cursor;
//! - [`Scanner::take_back`] reads the expression ending just before a cursor.

use num_bigint::BigUint;

use crate::diagnostic::Diagnostic;
use crate::lexeme::{Lexeme, Operator};
use crate::span::{Span, Spanned};

/// A scanned expression, before bracket normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub prefix: Vec<Operator>,
    pub body: Body,
    /// Whole expression, prefix included.
    pub span: Span,
    /// The atom or the bracketed group alone.
    pub body_span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Atom(BigUint),
    Group(Vec<Expr>),
}

impl Expr {
    pub fn atom(value: BigUint, span: Span) -> Self {
        Self {
            prefix: Vec::new(),
            body: Body::Atom(value),
            span,
            body_span: span,
        }
    }

    pub fn group(items: Vec<Expr>, span: Span) -> Self {
        Self {
            prefix: Vec::new(),
            body: Body::Group(items),
            span,
            body_span: span,
        }
    }

    /// A bare two-element group `[head tail]` spanning both parts.
    pub fn pair(head: Expr, tail: Expr) -> Self {
        let span = head.span.merge(tail.span);
        Self::group(vec![head, tail], span)
    }

    /// Prepend an operator to the prefix.
    pub fn with_operator(mut self, op: Operator) -> Self {
        self.prefix.insert(0, op);
        self
    }

    /// Number of elements if this is a group.
    pub fn arity(&self) -> Option<usize> {
        match &self.body {
            Body::Atom(_) => None,
            Body::Group(items) => Some(items.len()),
        }
    }

    /// Flatten back into tokens, carrying approximate spans.
    pub fn to_tokens(&self) -> Vec<Spanned<Lexeme>> {
        let mut out = Vec::new();
        self.write_tokens(&mut out);
        out
    }

    fn write_tokens(&self, out: &mut Vec<Spanned<Lexeme>>) {
        let prefix_span = Span::new(self.span.start, self.body_span.start);
        for op in &self.prefix {
            out.push(Spanned::new(Lexeme::Op(*op), prefix_span));
        }
        match &self.body {
            Body::Atom(value) => out.push(Spanned::new(Lexeme::Atom(value.clone()), self.body_span)),
            Body::Group(items) => {
                let open = Span::new(self.body_span.start, self.body_span.start + 1);
                let close = Span::new(self.body_span.end.saturating_sub(1), self.body_span.end);
                out.push(Spanned::new(Lexeme::LBracket, open));
                for item in items {
                    item.write_tokens(out);
                }
                out.push(Spanned::new(Lexeme::RBracket, close));
            }
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for op in &self.prefix {
            write!(f, "{}", op)?;
        }
        match &self.body {
            Body::Atom(value) => write!(f, "{}", value),
            Body::Group(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Cursor-based reader over a token buffer. A trailing `Eof` is ignored.
pub struct Scanner<'t> {
    tokens: &'t [Spanned<Lexeme>],
}

impl<'t> Scanner<'t> {
    pub fn new(tokens: &'t [Spanned<Lexeme>]) -> Self {
        let tokens = match tokens.split_last() {
            Some((last, rest)) if last.node == Lexeme::Eof => rest,
            _ => tokens,
        };
        Self { tokens }
    }

    /// Number of scannable tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, index: usize) -> Option<&'t Spanned<Lexeme>> {
        self.tokens.get(index)
    }

    /// Read the expression starting at `cursor`.
    ///
    /// Returns the expression and the cursor just past its last token.
    pub fn take_front(&self, cursor: usize) -> Result<(Expr, usize), Diagnostic> {
        let mut pos = cursor;
        let mut prefix = Vec::new();
        while let Some(op) = self.tokens.get(pos).and_then(|t| t.node.operator()) {
            prefix.push(op);
            pos += 1;
        }

        let Some(tok) = self.tokens.get(pos) else {
            return Err(self.missing_operand(&prefix, cursor, self.end_span()));
        };

        let (body, body_span, next) = match &tok.node {
            Lexeme::Atom(value) => (Body::Atom(value.clone()), tok.span, pos + 1),
            Lexeme::LBracket => {
                let open = tok.span;
                let mut items = Vec::new();
                pos += 1;
                loop {
                    match self.tokens.get(pos) {
                        None | Some(Spanned {
                            node: Lexeme::Eof, ..
                        }) => return Err(unclosed(open)),
                        Some(Spanned {
                            node: Lexeme::RBracket,
                            span,
                        }) => {
                            let body_span = open.merge(*span);
                            break (Body::Group(items), body_span, pos + 1);
                        }
                        Some(_) => {
                            let (item, after) = self.take_front(pos)?;
                            items.push(item);
                            pos = after;
                        }
                    }
                }
            }
            Lexeme::RBracket if prefix.is_empty() => return Err(unmatched_close(tok.span)),
            Lexeme::RBracket | Lexeme::Eof => {
                return Err(self.missing_operand(&prefix, cursor, tok.span));
            }
            Lexeme::Op(_) => unreachable!("operators are consumed as prefix"),
        };

        let start = self.tokens[cursor].span;
        Ok((
            Expr {
                prefix,
                body,
                span: start.merge(body_span),
                body_span,
            },
            next,
        ))
    }

    /// Read the expression whose last token sits at `end - 1`.
    ///
    /// Returns the expression and the index of its first token, prefix
    /// operators included.
    pub fn take_back(&self, end: usize) -> Result<(Expr, usize), Diagnostic> {
        if end == 0 || end > self.tokens.len() {
            let span = self.tokens.first().map(|t| t.span).unwrap_or_else(Span::dummy);
            return Err(Diagnostic::syntax(
                "expected an expression".to_string(),
                Span::new(span.start, span.start),
            ));
        }

        let last = &self.tokens[end - 1];
        let (body, body_span, body_start) = match &last.node {
            Lexeme::Atom(value) => (Body::Atom(value.clone()), last.span, end - 1),
            Lexeme::RBracket => {
                let mut pos = end - 1;
                let mut items = Vec::new();
                loop {
                    if pos == 0 {
                        return Err(unmatched_close(last.span));
                    }
                    match &self.tokens[pos - 1].node {
                        Lexeme::LBracket => {
                            pos -= 1;
                            break;
                        }
                        _ => {
                            let (item, start) = self.take_back(pos)?;
                            items.push(item);
                            pos = start;
                        }
                    }
                }
                items.reverse();
                let body_span = self.tokens[pos].span.merge(last.span);
                (Body::Group(items), body_span, pos)
            }
            Lexeme::LBracket => return Err(unclosed(last.span)),
            Lexeme::Op(op) => {
                return Err(Diagnostic::syntax(
                    format!("operator '{}' has no operand", op),
                    last.span,
                ))
            }
            Lexeme::Eof => {
                return Err(Diagnostic::syntax(
                    "expected an expression".to_string(),
                    last.span,
                ))
            }
        };

        let mut start = body_start;
        let mut prefix = Vec::new();
        while start > 0 {
            match self.tokens[start - 1].node.operator() {
                Some(op) => {
                    prefix.push(op);
                    start -= 1;
                }
                None => break,
            }
        }
        prefix.reverse();

        Ok((
            Expr {
                prefix,
                body,
                span: self.tokens[start].span.merge(body_span),
                body_span,
            },
            start,
        ))
    }

    fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map(|t| t.span.end_point())
            .unwrap_or_else(Span::dummy)
    }

    fn missing_operand(&self, prefix: &[Operator], cursor: usize, at: Span) -> Diagnostic {
        match prefix.last() {
            Some(op) => Diagnostic::syntax(
                format!("operator '{}' has no operand", op),
                self.tokens[cursor].span.merge(at),
            )
            .with_help("an operator must be followed by an atom or a '[' group".to_string()),
            None => Diagnostic::syntax("expected an expression, found end of input".to_string(), at),
        }
    }
}

fn unclosed(open: Span) -> Diagnostic {
    Diagnostic::syntax("unclosed '['".to_string(), open)
        .with_help("add a matching ']'".to_string())
}

fn unmatched_close(close: Span) -> Diagnostic {
    Diagnostic::syntax("unmatched ']'".to_string(), close)
        .with_help("remove it, or open the group with '['".to_string())
}
