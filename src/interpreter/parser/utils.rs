use std::iter::Peekable;

use crate::{error::ParseError, interpreter::lexer::Token};

/// Number of upcoming tokens shown in a diagnostic.
pub const CONTEXT_TOKENS: usize = 5;

/// Deepest loop nesting the parser accepts.
///
/// Blocks are parsed recursively, so without a limit a long run of
/// `loop {` would exhaust the stack instead of producing an error.
pub const MAX_NESTING: usize = 256;

/// A token stream with one token of lookahead.
///
/// Wraps any cloneable iterator of `(Token, line)` pairs. Tokens are consumed
/// exactly once; there is no way to step back. The stream remembers the line
/// of the last token it handed out, so errors at end of input still point
/// at the right place.
#[derive(Clone)]
pub struct TokenStream<I>
    where I: Iterator<Item = (Token, usize)> + Clone
{
    tokens: Peekable<I>,
    line:   usize,
    depth:  usize,
}

impl<I> TokenStream<I> where I: Iterator<Item = (Token, usize)> + Clone
{
    /// Wraps a token iterator.
    pub fn new(tokens: I) -> Self {
        Self { tokens: tokens.peekable(),
               line:   1,
               depth:  0, }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek().map(|(token, _)| token)
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Option<Token> {
        let (token, line) = self.tokens.next()?;
        self.line = line;

        Some(token)
    }

    /// The line of the next token, or of the last token if the stream is
    /// exhausted.
    pub fn line(&mut self) -> usize {
        match self.tokens.peek() {
            Some((_, line)) => *line,
            None => self.line,
        }
    }

    /// Requires the next token to be `expected`.
    ///
    /// On a match the token is consumed and returned; otherwise nothing is
    /// consumed and the parse fails with a message naming `expected`.
    ///
    /// # Errors
    /// Returns [`ParseError::Missing`] if the next token is anything else or
    /// the stream is exhausted.
    pub fn require(&mut self, expected: &Token) -> Result<Token, ParseError> {
        if self.peek() == Some(expected)
           && let Some(token) = self.next_token()
        {
            return Ok(token);
        }

        Err(self.missing(&format!("'{expected}'")))
    }

    /// Consumes the next token if it is `expected`.
    ///
    /// Returns whether a token was consumed. Used where the grammar branches
    /// rather than where a token is mandatory.
    pub fn check_for(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Records that a block has been opened.
    ///
    /// # Errors
    /// Returns [`ParseError::TooDeep`] if this block would nest deeper than
    /// [`MAX_NESTING`]. The depth is left unchanged in that case.
    pub fn enter_block(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::TooDeep { limit:   MAX_NESTING,
                                             context: self.context(),
                                             line:    self.line(), });
        }
        self.depth += 1;

        Ok(())
    }

    /// Records that the innermost open block has been closed.
    pub const fn leave_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Up to [`CONTEXT_TOKENS`] upcoming tokens, joined by spaces. Nothing is
    /// consumed.
    pub fn context(&self) -> String {
        self.tokens
            .clone()
            .take(CONTEXT_TOKENS)
            .map(|(token, _)| token.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builds a [`ParseError::Missing`] at the current position.
    pub fn missing(&mut self, expected: &str) -> ParseError {
        ParseError::Missing { expected: expected.to_string(),
                              context:  self.context(),
                              line:     self.line(), }
    }

    /// Builds a [`ParseError::EmptyBlock`] at the current position.
    pub fn empty_block(&mut self) -> ParseError {
        ParseError::EmptyBlock { context: self.context(),
                                 line:    self.line(), }
    }

    /// Builds a [`ParseError::InvalidStatement`] at the current position.
    pub fn invalid_statement(&mut self) -> ParseError {
        ParseError::InvalidStatement { context: self.context(),
                                       line:    self.line(), }
    }
}
