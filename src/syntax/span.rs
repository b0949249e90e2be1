/// A source location: byte offset range into the expression text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// A span for diagnostics that have no source position (configuration).
    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Zero-width span at the end of this one.
    pub fn end_point(self) -> Span {
        Span {
            start: self.end,
            end: self.end,
        }
    }
}

/// A value annotated with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_covers_both() {
        let a = Span::new(4, 6);
        let b = Span::new(1, 2);
        assert_eq!(a.merge(b), Span::new(1, 6));
        assert_eq!(b.merge(a), Span::new(1, 6));
    }

    #[test]
    fn test_end_point() {
        assert_eq!(Span::new(3, 9).end_point(), Span::new(9, 9));
    }
}
