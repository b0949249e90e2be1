//! The noun-level operators `?`, `+`, `=` and `/`.
//!
//! Each takes the already-reduced operand. `/` may answer with a further
//! reducible term: deep axes are peeled one level per step, as the axioms
//! define them.

use num_traits::{One, Zero};
use tracing::debug;

use super::crash::Crash;
use super::term::Term;
use crate::lexeme::Operator;
use crate::noun::Noun;

/// 0 is "yes", 1 is "no".
const YES: u32 = 0;
const NO: u32 = 1;

/// `?[a b] → 0`, `?a → 1`
pub fn cell_test(arg: &Noun) -> Noun {
    if arg.is_cell() {
        debug!(rule = "?[a b] → 0");
        Noun::atom(YES)
    } else {
        debug!(rule = "?a → 1");
        Noun::atom(NO)
    }
}

/// `+a → 1 + a`
pub fn increment(arg: &Noun) -> Result<Noun, Crash> {
    match arg {
        Noun::Atom(n) => {
            debug!(rule = "+a → 1 + a");
            Ok(Noun::Atom(n + 1u32))
        }
        Noun::Cell(..) => Err(Crash::IncrementOfCell),
    }
}

/// `=[a a] → 0`, `=[a b] → 1`
pub fn equals(arg: &Noun) -> Result<Noun, Crash> {
    let (a, b) = arg.as_cell().ok_or(Crash::EqualityOfAtom)?;
    if a == b {
        debug!(rule = "=[a a] → 0");
        Ok(Noun::atom(YES))
    } else {
        debug!(rule = "=[a b] → 1");
        Ok(Noun::atom(NO))
    }
}

/// Tree addressing, one axiom per call.
///
/// ```text
/// /[1 a]           a
/// /[2 a b]         a
/// /[3 a b]         b
/// /[(a + a) b]     /[2 /[a b]]
/// /[(a + a + 1) b] /[3 /[a b]]
/// ```
pub fn slot(arg: &Noun) -> Result<Term, Crash> {
    let (axis, tree) = arg.as_cell().ok_or(Crash::SlotOfAtom)?;
    let axis = axis.as_atom().ok_or(Crash::AxisNotAtom)?;

    if axis.is_zero() {
        return Err(Crash::AxisZero);
    }
    if axis.is_one() {
        debug!(rule = "/[1 a] → a");
        return Ok(Term::Noun(tree.clone()));
    }

    let (head, tail) = tree.as_cell().ok_or(Crash::SlotIntoAtom)?;
    match axis.to_u32_digits().as_slice() {
        [2] => {
            debug!(rule = "/[2 a b] → a");
            Ok(Term::Noun(head.clone()))
        }
        [3] => {
            debug!(rule = "/[3 a b] → b");
            Ok(Term::Noun(tail.clone()))
        }
        _ => {
            let parent = Noun::Atom(axis >> 1u32);
            let side = if axis.bit(0) {
                debug!(rule = "/[(a + a + 1) b] → /[3 /[a b]]");
                3u64
            } else {
                debug!(rule = "/[(a + a) b] → /[2 /[a b]]");
                2u64
            };
            let inner = Term::op(Operator::Slot, Noun::cell(parent, tree.clone()));
            Ok(Term::op(Operator::Slot, Term::cell(side, inner)))
        }
    }
}

/// Direct tree addressing by walking the axis bits, most significant first.
///
/// Agrees with repeated [`slot`] steps; used where an address is read
/// without going through the rewrite loop.
pub fn address(axis: &Noun, tree: &Noun) -> Result<Noun, Crash> {
    let axis = axis.as_atom().ok_or(Crash::AxisNotAtom)?;
    if axis.is_zero() {
        return Err(Crash::AxisZero);
    }
    let mut node = tree;
    for i in (0..axis.bits().saturating_sub(1)).rev() {
        let (head, tail) = node.as_cell().ok_or(Crash::SlotIntoAtom)?;
        node = if axis.bit(i) { tail } else { head };
    }
    Ok(node.clone())
}
