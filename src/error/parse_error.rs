/// Represents all errors that can occur while parsing.
///
/// Parsing is fail-fast, so a parse attempt produces at most one of these and
/// never a partial tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required token was not found.
    #[error("Error on line {line}: missing {expected}.\n   @ {}", at(.context))]
    Missing {
        /// Description of the token that was required, e.g. `';'`.
        expected: String,
        /// Up to five of the following tokens, joined by spaces.
        context:  String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A block was closed before it contained any statement.
    #[error("Error on line {line}: empty block, a block needs at least one statement.\n   @ {}", at(.context))]
    EmptyBlock {
        /// Up to five of the following tokens, joined by spaces.
        context: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The next token cannot start a statement.
    #[error("Error on line {line}: invalid statement, expected `loop` or an action.\n   @ {}", at(.context))]
    InvalidStatement {
        /// Up to five of the following tokens, joined by spaces.
        context: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Loops were nested deeper than the parser accepts.
    #[error("Error on line {line}: loops nested deeper than {limit} levels.\n   @ {}", at(.context))]
    TooDeep {
        /// The deepest nesting that is accepted.
        limit:   usize,
        /// Up to five of the following tokens, joined by spaces.
        context: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Missing { line, .. }
            | Self::EmptyBlock { line, .. }
            | Self::InvalidStatement { line, .. }
            | Self::TooDeep { line, .. } => *line,
        }
    }

    /// The tokens following the error position.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::Missing { context, .. }
            | Self::EmptyBlock { context, .. }
            | Self::InvalidStatement { context, .. }
            | Self::TooDeep { context, .. } => context,
        }
    }
}

fn at(context: &str) -> String {
    if context.is_empty() {
        "end of input".to_string()
    } else {
        format!("... {context} ...")
    }
}
