use num_bigint::BigUint;

use crate::diagnostic::Diagnostic;
use crate::lexeme::{Lexeme, Operator};
use crate::span::{Span, Spanned};

pub struct Lexer<'src> {
    source: &'src [u8],
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Split the source into tokens. The token list always ends with `Eof`.
    pub fn tokenize(mut self) -> (Vec<Spanned<Lexeme>>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = tok.node == Lexeme::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        (tokens, self.diagnostics)
    }

    fn next_token(&mut self) -> Spanned<Lexeme> {
        loop {
            self.skip_whitespace();

            if self.pos >= self.source.len() {
                return self.make_token(Lexeme::Eof, self.pos, self.pos);
            }

            let start = self.pos;
            let ch = self.source[self.pos];

            if ch.is_ascii_digit() {
                if let Some(tok) = self.scan_atom() {
                    return tok;
                }
                continue;
            }

            if let Some(tok) = self.scan_symbol(start) {
                return tok;
            }
            // scan_symbol returned None → error was recorded, try again
        }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.source.len() && self.source[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Digits, optionally grouped with `.` separators (`1.000.000`).
    fn scan_atom(&mut self) -> Option<Spanned<Lexeme>> {
        let start = self.pos;
        let mut digits = Vec::new();
        while self.pos < self.source.len() {
            let ch = self.source[self.pos];
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.pos += 1;
            } else if ch == b'.' {
                let next_is_digit = self
                    .source
                    .get(self.pos + 1)
                    .is_some_and(|c| c.is_ascii_digit());
                if !next_is_digit {
                    self.pos += 1;
                    self.diagnostics.push(
                        Diagnostic::syntax(
                            "dangling '.' in atom literal".to_string(),
                            Span::new(start as u32, self.pos as u32),
                        )
                        .with_help(
                            "'.' may only separate digit groups, as in 1.000.000".to_string(),
                        ),
                    );
                    return None;
                }
                self.pos += 1;
            } else {
                break;
            }
        }
        // Only ASCII digits were collected, so parsing cannot fail.
        let value = BigUint::parse_bytes(&digits, 10).unwrap_or_default();
        Some(self.make_token(Lexeme::Atom(value), start, self.pos))
    }

    fn scan_symbol(&mut self, start: usize) -> Option<Spanned<Lexeme>> {
        let ch = self.source[self.pos];
        self.pos += 1;

        let token = match ch {
            b'[' => Lexeme::LBracket,
            b']' => Lexeme::RBracket,
            _ => match Operator::from_symbol(ch) {
                Some(op) => Lexeme::Op(op),
                None => {
                    self.report_unexpected(start);
                    return None;
                }
            },
        };

        Some(self.make_token(token, start, self.pos))
    }

    fn report_unexpected(&mut self, start: usize) {
        let rest = String::from_utf8_lossy(&self.source[start..]);
        let shown = rest.chars().next().unwrap_or('?');
        // Step over the whole (possibly multi-byte) character.
        self.pos = start + shown.len_utf8().max(1);
        self.diagnostics.push(
            Diagnostic::syntax(
                format!("unexpected character '{}'", shown),
                Span::new(start as u32, self.pos as u32),
            )
            .with_note(format!("remaining input: \"{}\"", rest.trim_end()))
            .with_help(
                "expressions are built from atoms, '[' ']', and the operators ? + = / *"
                    .to_string(),
            ),
        );
    }

    fn make_token(&self, token: Lexeme, start: usize, end: usize) -> Spanned<Lexeme> {
        Spanned::new(token, Span::new(start as u32, end as u32))
    }
}
