//! Nouns: the only data type of the calculus.
//!
//! A noun is either an atom (an unsigned integer of arbitrary width) or a
//! cell (an ordered pair of nouns). Nouns are immutable; cells share their
//! halves through `Rc`, so copying a subject into a new formula is cheap.
//! Equality is structural.

use std::rc::Rc;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

#[derive(Debug, Clone, Eq)]
pub enum Noun {
    /// An atom: an unsigned integer of arbitrary width.
    Atom(BigUint),
    /// A cell: an ordered pair `[head tail]`.
    Cell(Rc<Noun>, Rc<Noun>),
}

impl Noun {
    /// Create an atom noun.
    pub fn atom(value: impl Into<BigUint>) -> Self {
        Noun::Atom(value.into())
    }

    /// Create a cell noun `[a b]`.
    pub fn cell(head: Noun, tail: Noun) -> Self {
        Noun::Cell(Rc::new(head), Rc::new(tail))
    }

    /// Right-nested construction: `[a b c]` is `[a [b c]]`.
    ///
    /// A single element is returned as is; an empty list is the atom 0.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Noun>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut rev = items.into_iter().rev();
        let Some(last) = rev.next() else {
            return Noun::atom(0u32);
        };
        rev.fold(last, |tail, head| Noun::cell(head, tail))
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, Noun::Cell(..))
    }

    pub fn as_atom(&self) -> Option<&BigUint> {
        match self {
            Noun::Atom(n) => Some(n),
            Noun::Cell(..) => None,
        }
    }

    pub fn as_cell(&self) -> Option<(&Noun, &Noun)> {
        match self {
            Noun::Atom(_) => None,
            Noun::Cell(h, t) => Some((h, t)),
        }
    }

    /// The atom as a machine word, if it is an atom that fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_atom().and_then(|n| n.to_u64())
    }
}

impl PartialEq for Noun {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Noun::Atom(a), Noun::Atom(b)) => a == b,
            (Noun::Cell(ah, at), Noun::Cell(bh, bt)) => {
                (Rc::ptr_eq(ah, bh) || ah == bh) && (Rc::ptr_eq(at, bt) || at == bt)
            }
            _ => false,
        }
    }
}

impl From<u64> for Noun {
    fn from(value: u64) -> Self {
        Noun::atom(value)
    }
}

impl From<BigUint> for Noun {
    fn from(value: BigUint) -> Self {
        Noun::Atom(value)
    }
}

impl std::fmt::Display for Noun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Noun::Atom(v) => write!(f, "{}", v),
            Noun::Cell(h, t) => write!(f, "[{} {}]", h, t),
        }
    }
}
