//! The reduction engine.
//!
//! A [`Term`] is reduced by repeatedly applying one axiom to the innermost
//! operator whose operand is already a noun. Operands reduce left to right.
//! Tail positions loop instead of recursing, so a Nock loop written with
//! `2` or `9` runs in constant stack.

mod crash;
mod formula;
mod primitives;
mod term;

#[cfg(test)]
mod tests;

pub use crash::Crash;
pub use primitives::{address, cell_test, equals, increment, slot};
pub use term::Term;

use tracing::{debug, debug_span, trace};

use crate::config::Settings;
use crate::lexeme::Operator;
use crate::noun::Noun;

/// Outcome of one evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    Product(Noun),
    Crash(Crash),
}

impl Evaluation {
    pub fn product(&self) -> Option<&Noun> {
        match self {
            Evaluation::Product(noun) => Some(noun),
            Evaluation::Crash(_) => None,
        }
    }

    pub fn is_crash(&self) -> bool {
        matches!(self, Evaluation::Crash(_))
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluation::Product(noun) => write!(f, "{}", noun),
            Evaluation::Crash(_) => write!(f, "CRASH"),
        }
    }
}

/// Reduces terms under a fixed set of [`Settings`].
#[derive(Clone, Debug, Default)]
pub struct Engine {
    settings: Settings,
}

impl Engine {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Reduce `term` to its product, or to the reason it crashed.
    pub fn evaluate(&self, term: Term) -> Evaluation {
        debug!(strict = self.settings.strict, "evaluating {}", term);
        match self.reduce(term) {
            Ok(noun) => Evaluation::Product(noun),
            Err(crash) => {
                debug!(%crash, "crash");
                Evaluation::Crash(crash)
            }
        }
    }

    pub fn reduce(&self, term: Term) -> Result<Noun, Crash> {
        let mut term = term;
        loop {
            match term {
                Term::Noun(noun) => return Ok(noun),
                Term::Cell(head, tail) => {
                    let head = self.reduce_nested(*head)?;
                    let tail = self.reduce_nested(*tail)?;
                    return Ok(Noun::cell(head, tail));
                }
                Term::Op(op, arg) => {
                    let arg = self.reduce_nested(*arg)?;
                    trace!("{}{}", op, arg);
                    let next = self.step(op, &arg)?;
                    // Only relaxed `9` can repeat itself literally: the core is the
                    // subject and the arm is the formula. Under strict expansion the
                    // same input loops forever without a literal repeat.
                    if next.is_application(op, &arg) {
                        return Err(Crash::NoProgress);
                    }
                    term = next;
                }
            }
        }
    }

    /// Reduce an operand. Each nested reduction gets its own span.
    fn reduce_nested(&self, term: Term) -> Result<Noun, Crash> {
        match term {
            Term::Noun(noun) => Ok(noun),
            other => {
                let _span = debug_span!("reduce").entered();
                self.reduce(other)
            }
        }
    }

    /// Apply one axiom to `op arg`.
    fn step(&self, op: Operator, arg: &Noun) -> Result<Term, Crash> {
        match op {
            Operator::CellTest => Ok(Term::Noun(cell_test(arg))),
            Operator::Increment => increment(arg).map(Term::Noun),
            Operator::Equals => equals(arg).map(Term::Noun),
            Operator::Slot => slot(arg),
            Operator::Apply => self.apply(arg),
        }
    }
}
