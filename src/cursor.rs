//! Character cursor over an immutable source buffer.
//!
//! Offsets are byte offsets into the source. `start` marks the first
//! character of the lexeme being scanned, `current` the next unread one.
//! The line counter is zero-based and advances on every `\n` consumed.

/// Returned by [`Cursor::match_until`] when input ends before any delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("delimiter not found")]
pub struct DelimiterNotFound;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 0,
        }
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Begin a new lexeme at the current position.
    pub const fn mark_start(&mut self) {
        self.start = self.current;
    }

    /// Source text of the lexeme being scanned (`start..current`).
    #[must_use]
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// Source text from the start of the current lexeme onwards.
    #[must_use]
    pub fn from_start(&self) -> &'a str {
        &self.source[self.start..]
    }

    /// Unread remainder of the source.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.current..]
    }

    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character, or `None` at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.current += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Whether the unread input starts with `literal`. Never consumes.
    #[must_use]
    pub fn peek(&self, literal: &str) -> bool {
        self.rest().starts_with(literal)
    }

    /// Consume `count` bytes of already-peeked text.
    pub fn skip(&mut self, count: usize) {
        let target = (self.current + count).min(self.source.len());
        while self.current < target {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Scan forward until one of `delimiters`, consuming through it.
    ///
    /// Returns the text from `from` up to and including the delimiter,
    /// together with the delimiter itself. On failure the cursor is left
    /// at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`DelimiterNotFound`] if input is exhausted first.
    pub fn match_until(
        &mut self,
        delimiters: &str,
        from: usize,
    ) -> Result<(&'a str, char), DelimiterNotFound> {
        while let Some(ch) = self.advance() {
            if delimiters.contains(ch) {
                return Ok((&self.source[from..self.current], ch));
            }
        }
        Err(DelimiterNotFound)
    }
}
