pub mod brackets;
pub mod lexeme;
pub mod lexer;
pub mod scan;
pub mod span;
