/// How serious a [`Diagnostic`](crate::Diagnostic) is.
///
/// Neither severity aborts the parse; every token is always processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The token was skipped, but the command line may still be usable.
    Warning,
    /// The token (or the command line as a whole) is malformed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

/// The highlighted region of one command line token.
///
/// `index` points into the full argv (index `0` is the program name).
/// `start` and `end` are character offsets within that token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    index: usize,
    start: usize,
    end: usize,
}

impl Span {
    pub(crate) fn new(index: usize, start: usize, end: usize) -> Self {
        Self { index, start, end }
    }

    /// Highlight the whole token.
    pub(crate) fn token(index: usize, token: &str) -> Self {
        Self::new(index, 0, token.chars().count())
    }

    /// The argv index of the highlighted token.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The first highlighted character of the token.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last highlighted character of the token.
    pub fn end(&self) -> usize {
        self.end
    }
}
