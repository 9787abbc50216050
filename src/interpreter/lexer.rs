use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Token boundaries are runs of whitespace and the punctuation characters
/// `{ } ( ) , ;`, which always form single-character tokens even when glued
/// to a neighbour, so `move;` lexes as `move` followed by `;`. Logos picks the
/// longest match, which keeps `loopy` a word rather than `loop` + `y`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `loop`
    #[token("loop")]
    Loop,
    /// `move`
    #[token("move")]
    Move,
    /// `turnL`
    #[token("turnL")]
    TurnL,
    /// `turnR`
    #[token("turnR")]
    TurnR,
    /// `takeFuel`
    #[token("takeFuel")]
    TakeFuel,
    /// `wait`
    #[token("wait")]
    Wait,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Numeral tokens such as `12` or `-3`, kept as written.
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string(), priority = 3)]
    Number(String),
    /// Any other run of characters that is neither whitespace nor punctuation.
    #[regex(r"[^\s{}(),;]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
    /// Whitespace; newlines advance the line counter.
    #[regex(r"\s+", |lex| {
        let newlines     = lex.slice().chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    Whitespace,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Loop => "loop",
            Self::Move => "move",
            Self::TurnL => "turnL",
            Self::TurnR => "turnR",
            Self::TakeFuel => "takeFuel",
            Self::Wait => "wait",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Number(text) | Self::Word(text) => text,
            Self::Whitespace => " ",
        };
        write!(f, "{text}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Clone, Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// A lazy, forward-only stream of `(Token, line)` pairs over a source string.
///
/// The stream is `Clone`, so the parser can look ahead for diagnostics
/// without consuming anything. Starting over means building a new
/// `Tokenizer` from the same source.
///
/// # Example
/// ```
/// use robodsl::interpreter::lexer::{Token, Tokenizer};
///
/// let tokens: Vec<Token> = Tokenizer::new("move;").map(|(token, _)| token).collect();
/// assert_eq!(tokens, vec![Token::Move, Token::Semicolon]);
/// ```
#[derive(Clone)]
pub struct Tokenizer<'s> {
    lexer: logos::Lexer<'s, Token>,
}

impl<'s> Tokenizer<'s> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { lexer: Token::lexer_with_extras(source, LexerExtras::default()) }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next()?;
        let line = self.lexer.extras.line;

        // The word pattern covers every non-whitespace slice, but nothing
        // here is allowed to fail, so an unmatched slice is still a word.
        Some((token.unwrap_or_else(|()| Token::Word(self.lexer.slice().to_string())), line))
    }
}
