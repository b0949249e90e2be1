pub mod api;
pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod noun;
pub mod syntax;

// Re-exports: reader modules keep short `crate::X` paths
pub use syntax::lexeme;
pub use syntax::lexer;
pub use syntax::span;

pub use api::*;
pub use config::Settings;
pub use diagnostic::Diagnostic;
pub use engine::{Crash, Engine, Evaluation, Term};
pub use noun::Noun;
