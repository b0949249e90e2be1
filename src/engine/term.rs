//! Terms: nouns that may still contain pending operator applications.

use crate::diagnostic::Diagnostic;
use crate::lexeme::Operator;
use crate::noun::Noun;
use crate::syntax::scan::{Body, Expr};

#[derive(Debug, Clone)]
pub enum Term {
    /// Fully reduced data.
    Noun(Noun),
    /// A pair whose halves may still need reducing.
    Cell(Box<Term>, Box<Term>),
    /// `op arg`: an operator applied to a term.
    Op(Operator, Box<Term>),
}

impl Term {
    pub fn cell(head: impl Into<Term>, tail: impl Into<Term>) -> Self {
        Term::Cell(Box::new(head.into()), Box::new(tail.into()))
    }

    pub fn op(op: Operator, arg: impl Into<Term>) -> Self {
        Term::Op(op, Box::new(arg.into()))
    }

    /// `*[subject formula]`
    pub fn apply(subject: impl Into<Term>, formula: impl Into<Term>) -> Self {
        Term::op(Operator::Apply, Term::cell(subject, formula))
    }

    /// Lower a bracket-normalized expression. Every group must be a pair.
    pub fn from_expr(expr: &Expr) -> Result<Term, Diagnostic> {
        let body = match &expr.body {
            Body::Atom(value) => Term::Noun(Noun::Atom(value.clone())),
            Body::Group(items) => match items.as_slice() {
                [head, tail] => Term::cell(Term::from_expr(head)?, Term::from_expr(tail)?),
                _ => {
                    return Err(Diagnostic::syntax(
                        format!("expected a pair, found a group of {}", items.len()),
                        expr.body_span,
                    )
                    .with_help("normalize brackets before lowering".to_string()))
                }
            },
        };
        Ok(expr
            .prefix
            .iter()
            .rev()
            .fold(body, |arg, op| Term::op(*op, arg)))
    }

    /// Whether this term renders as `op arg`.
    pub fn is_application(&self, op: Operator, arg: &Noun) -> bool {
        match self {
            Term::Op(o, inner) => *o == op && TermRef::Term(inner).same_text(TermRef::Noun(arg)),
            _ => false,
        }
    }

    fn as_pair(&self) -> Option<(TermRef<'_>, TermRef<'_>)> {
        match self {
            Term::Cell(h, t) => Some((TermRef::Term(h), TermRef::Term(t))),
            Term::Noun(Noun::Cell(h, t)) => Some((TermRef::Noun(h), TermRef::Noun(t))),
            _ => None,
        }
    }
}

/// Borrowed view used to compare a `Term::Cell` with a `Term::Noun` cell.
#[derive(Clone, Copy)]
enum TermRef<'a> {
    Term(&'a Term),
    Noun(&'a Noun),
}

impl TermRef<'_> {
    fn same_text(self, other: TermRef<'_>) -> bool {
        match (self, other) {
            (TermRef::Noun(a), TermRef::Noun(b)) => a == b,
            (TermRef::Term(a), TermRef::Term(b)) => a == b,
            (TermRef::Term(t), TermRef::Noun(n)) | (TermRef::Noun(n), TermRef::Term(t)) => {
                match t {
                    Term::Noun(m) => m == n,
                    Term::Cell(h, tl) => match n {
                        Noun::Cell(nh, nt) => {
                            TermRef::Term(h).same_text(TermRef::Noun(nh))
                                && TermRef::Term(tl).same_text(TermRef::Noun(nt))
                        }
                        Noun::Atom(_) => false,
                    },
                    Term::Op(..) => false,
                }
            }
        }
    }
}

/// Two terms are equal when they render to the same text.
impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Op(a, x), Term::Op(b, y)) => a == b && x == y,
            (Term::Noun(a), Term::Noun(b)) => a == b,
            (Term::Op(..), _) | (_, Term::Op(..)) => false,
            _ => match (self.as_pair(), other.as_pair()) {
                (Some((ah, at)), Some((bh, bt))) => ah.same_text(bh) && at.same_text(bt),
                _ => false,
            },
        }
    }
}

impl From<Noun> for Term {
    fn from(noun: Noun) -> Self {
        Term::Noun(noun)
    }
}

impl From<u64> for Term {
    fn from(value: u64) -> Self {
        Term::Noun(Noun::atom(value))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Noun(noun) => write!(f, "{}", noun),
            Term::Cell(h, t) => write!(f, "[{} {}]", h, t),
            Term::Op(op, arg) => write!(f, "{}{}", op, arg),
        }
    }
}
