//! Formula application: `*[subject formula]`.
//!
//! ```text
//! *[a [b c] d]     [*[a b c] *[a d]]
//!
//! *[a 0 b]         /[b a]
//! *[a 1 b]         b
//! *[a 2 b c]       *[*[a b] *[a c]]
//! *[a 3 b]         ?*[a b]
//! *[a 4 b]         +*[a b]
//! *[a 5 b]         =*[a b]
//!
//! *[a 6 b c d]     *[a 2 [0 1] 2 [1 c d] [1 0] 2 [1 2 3] [1 0] 4 4 b]
//! *[a 7 b c]       *[a 2 b 1 c]
//! *[a 8 b c]       *[a 7 [[7 [0 1] b] 0 1] c]
//! *[a 9 b c]       *[a 7 c 2 [0 1] 0 b]
//! *[a 10 [b c] d]  *[a 8 c 7 [0 3] d]
//! *[a 10 b c]      *[a c]
//! ```
//!
//! Opcodes 6–10 are macros. In strict mode they expand into the formulas
//! above; otherwise they take a shortcut with the same product.

use tracing::debug;

use super::crash::Crash;
use super::primitives::address;
use super::term::Term;
use super::Engine;
use crate::lexeme::Operator;
use crate::noun::Noun;

fn n(value: u64) -> Noun {
    Noun::atom(value)
}

fn pair(head: u64, tail: u64) -> Noun {
    Noun::cell(n(head), n(tail))
}

/// Split macro operands, crashing with the opcode when they are not a pair.
fn operands(noun: &Noun, opcode: u8) -> Result<(&Noun, &Noun), Crash> {
    noun.as_cell().ok_or(Crash::MalformedOperands { opcode })
}

impl Engine {
    /// One `*` step on a reduced operand.
    pub(super) fn apply(&self, arg: &Noun) -> Result<Term, Crash> {
        let (a, formula) = arg.as_cell().ok_or(Crash::ApplyToAtom)?;
        let (head, rest) = formula.as_cell().ok_or(Crash::FormulaIsAtom)?;

        let code = match head {
            Noun::Cell(..) => {
                debug!(rule = "*[a [b c] d] → [*[a b c] *[a d]]");
                return Ok(Term::cell(
                    Term::apply(a.clone(), head.clone()),
                    Term::apply(a.clone(), rest.clone()),
                ));
            }
            Noun::Atom(code) => code,
        };

        let opcode = match head.as_u64() {
            Some(op) if op <= 10 => op as u8,
            _ => return Err(Crash::UnknownOpcode(code.clone())),
        };

        let strict = self.settings().strict;
        match opcode {
            0 => {
                debug!(rule = "*[a 0 b] → /[b a]");
                Ok(Term::op(Operator::Slot, Noun::cell(rest.clone(), a.clone())))
            }
            1 => {
                debug!(rule = "*[a 1 b] → b");
                Ok(Term::Noun(rest.clone()))
            }
            2 => {
                let (b, c) = operands(rest, 2)?;
                debug!(rule = "*[a 2 b c] → *[*[a b] *[a c]]");
                Ok(Term::apply(
                    Term::apply(a.clone(), b.clone()),
                    Term::apply(a.clone(), c.clone()),
                ))
            }
            3 => {
                debug!(rule = "*[a 3 b] → ?*[a b]");
                Ok(Term::op(Operator::CellTest, Term::apply(a.clone(), rest.clone())))
            }
            4 => {
                debug!(rule = "*[a 4 b] → +*[a b]");
                Ok(Term::op(Operator::Increment, Term::apply(a.clone(), rest.clone())))
            }
            5 => {
                debug!(rule = "*[a 5 b] → =*[a b]");
                Ok(Term::op(Operator::Equals, Term::apply(a.clone(), rest.clone())))
            }
            6 => {
                let (b, cd) = operands(rest, 6)?;
                let (c, d) = operands(cd, 6)?;
                if strict {
                    debug!(rule = "*[a 6 b c d] → *[a 2 [0 1] 2 [1 c d] [1 0] 2 [1 2 3] [1 0] 4 4 b]");
                    let expanded = Noun::list([
                        n(2),
                        pair(0, 1),
                        n(2),
                        Noun::list([n(1), c.clone(), d.clone()]),
                        pair(1, 0),
                        n(2),
                        Noun::list([n(1), n(2), n(3)]),
                        pair(1, 0),
                        n(4),
                        n(4),
                        b.clone(),
                    ]);
                    return Ok(Term::apply(a.clone(), expanded));
                }
                debug!(rule = "*[a 6 b c d] → *[a c] if *[a b] = 0, *[a d] if 1");
                let test = self.reduce_nested(Term::apply(a.clone(), b.clone()))?;
                match test.as_u64() {
                    Some(0) => Ok(Term::apply(a.clone(), c.clone())),
                    Some(1) => Ok(Term::apply(a.clone(), d.clone())),
                    _ => Err(Crash::BranchNotBoolean(test)),
                }
            }
            7 => {
                let (b, c) = operands(rest, 7)?;
                if strict {
                    debug!(rule = "*[a 7 b c] → *[a 2 b 1 c]");
                    let expanded = Noun::list([n(2), b.clone(), n(1), c.clone()]);
                    Ok(Term::apply(a.clone(), expanded))
                } else {
                    debug!(rule = "*[a 7 b c] → *[*[a b] c]");
                    Ok(Term::apply(Term::apply(a.clone(), b.clone()), c.clone()))
                }
            }
            8 => {
                let (b, c) = operands(rest, 8)?;
                if strict {
                    debug!(rule = "*[a 8 b c] → *[a 7 [[7 [0 1] b] 0 1] c]");
                    let push = Noun::cell(Noun::list([n(7), pair(0, 1), b.clone()]), pair(0, 1));
                    let expanded = Noun::list([n(7), push, c.clone()]);
                    Ok(Term::apply(a.clone(), expanded))
                } else {
                    debug!(rule = "*[a 8 b c] → *[[*[a b] a] c]");
                    let subject = Term::cell(Term::apply(a.clone(), b.clone()), a.clone());
                    Ok(Term::apply(subject, c.clone()))
                }
            }
            9 => {
                let (b, c) = operands(rest, 9)?;
                if strict {
                    debug!(rule = "*[a 9 b c] → *[a 7 c 2 [0 1] 0 b]");
                    let expanded =
                        Noun::list([n(7), c.clone(), n(2), pair(0, 1), n(0), b.clone()]);
                    Ok(Term::apply(a.clone(), expanded))
                } else {
                    // The core is computed once and its arm read directly.
                    debug!(rule = "*[a 9 b c] → *[*[a c] *[*[a c] 0 b]]");
                    let core = self.reduce_nested(Term::apply(a.clone(), c.clone()))?;
                    let arm = address(b, &core)?;
                    Ok(Term::apply(core, arm))
                }
            }
            10 => {
                let (hint, d) = operands(rest, 10)?;
                match hint.as_cell() {
                    Some((_, c)) if strict => {
                        debug!(rule = "*[a 10 [b c] d] → *[a 8 c 7 [0 3] d]");
                        let expanded =
                            Noun::list([n(8), c.clone(), n(7), pair(0, 3), d.clone()]);
                        Ok(Term::apply(a.clone(), expanded))
                    }
                    Some((_, c)) => {
                        debug!(rule = "*[a 10 [b c] d] → *[*[[*[a c] a] 0 3] d]");
                        let pushed = Term::cell(Term::apply(a.clone(), c.clone()), a.clone());
                        Ok(Term::apply(Term::apply(pushed, pair(0, 3)), d.clone()))
                    }
                    None => {
                        debug!(rule = "*[a 10 b c] → *[a c]");
                        Ok(Term::apply(a.clone(), d.clone()))
                    }
                }
            }
            _ => Err(Crash::UnknownOpcode(code.clone())),
        }
    }
}
