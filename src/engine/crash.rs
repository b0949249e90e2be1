use num_bigint::BigUint;

use crate::noun::Noun;

/// Why an evaluation stopped without a product.
///
/// A crash is an ordinary outcome of the calculus: no axiom applies to the
/// run-time shape of the operands, or a step made no progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    /// `+[a b]`
    IncrementOfCell,
    /// `=a`: equality needs a pair to compare.
    EqualityOfAtom,
    /// `/a`: addressing needs `[axis tree]`.
    SlotOfAtom,
    /// `/[[x y] b]`
    AxisNotAtom,
    /// `/[0 b]`
    AxisZero,
    /// `/[n a]` with `n >= 2` and an atom tree.
    SlotIntoAtom,
    /// `*a`: application needs `[subject formula]`.
    ApplyToAtom,
    /// `*[a b]` with an atom formula.
    FormulaIsAtom,
    /// No axiom for this opcode.
    UnknownOpcode(BigUint),
    /// The opcode exists but its operands have the wrong shape.
    MalformedOperands { opcode: u8 },
    /// Relaxed `6`: the test produced something other than 0 or 1.
    BranchNotBoolean(Noun),
    /// A rewrite step reproduced its own input.
    NoProgress,
}

impl std::fmt::Display for Crash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Crash::IncrementOfCell => write!(f, "cannot increment a cell"),
            Crash::EqualityOfAtom => write!(f, "equality test needs a cell"),
            Crash::SlotOfAtom => write!(f, "tree addressing needs [axis noun]"),
            Crash::AxisNotAtom => write!(f, "tree address must be an atom"),
            Crash::AxisZero => write!(f, "tree address 0 does not exist"),
            Crash::SlotIntoAtom => write!(f, "cannot address into an atom"),
            Crash::ApplyToAtom => write!(f, "formula application needs [subject formula]"),
            Crash::FormulaIsAtom => write!(f, "formula is an atom"),
            Crash::UnknownOpcode(op) => write!(f, "no axiom for opcode {}", op),
            Crash::MalformedOperands { opcode } => {
                write!(f, "malformed operands for opcode {}", opcode)
            }
            Crash::BranchNotBoolean(noun) => {
                write!(f, "branch test produced {}, expected 0 or 1", noun)
            }
            Crash::NoProgress => write!(f, "reduction made no progress"),
        }
    }
}
