use num_bigint::BigUint;

/// The five unary operators of the notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `?`: cell test.
    CellTest,
    /// `+`: increment.
    Increment,
    /// `=`: equality test.
    Equals,
    /// `/`: tree addressing.
    Slot,
    /// `*`: formula application.
    Apply,
}

impl Operator {
    pub fn from_symbol(ch: u8) -> Option<Operator> {
        match ch {
            b'?' => Some(Operator::CellTest),
            b'+' => Some(Operator::Increment),
            b'=' => Some(Operator::Equals),
            b'/' => Some(Operator::Slot),
            b'*' => Some(Operator::Apply),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::CellTest => '?',
            Operator::Increment => '+',
            Operator::Equals => '=',
            Operator::Slot => '/',
            Operator::Apply => '*',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// All lexemes of the noun notation.
#[derive(Clone, Debug, PartialEq)]
pub enum Lexeme {
    Op(Operator),
    Atom(BigUint),
    LBracket, // [
    RBracket, // ]

    // End of input
    Eof,
}

impl Lexeme {
    pub fn description(&self) -> &'static str {
        match self {
            Lexeme::Op(_) => "operator",
            Lexeme::Atom(_) => "atom",
            Lexeme::LBracket => "'['",
            Lexeme::RBracket => "']'",
            Lexeme::Eof => "end of input",
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Lexeme::Op(op) => Some(*op),
            _ => None,
        }
    }
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lexeme::Op(op) => write!(f, "{}", op),
            Lexeme::Atom(n) => write!(f, "{}", n),
            Lexeme::LBracket => write!(f, "["),
            Lexeme::RBracket => write!(f, "]"),
            Lexeme::Eof => Ok(()),
        }
    }
}
