use crate::{
    ast::Block,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{MAX_NESTING, TokenStream},
        },
    },
};

/// Parses a block delimited by braces.
///
/// Statements are parsed until the closing `}` is the next token. A block
/// must hold at least one statement; `{ }` is rejected wherever it appears.
///
/// Grammar: `block := "{" statement+ "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The parsed, non-empty [`Block`].
///
/// # Errors
/// - `Missing` if the opening `{` is absent, or the input ends before `}`.
/// - `EmptyBlock` if `}` follows `{` directly.
/// - `TooDeep` if the block would nest deeper than [`MAX_NESTING`].
/// - Propagates any error from the statements inside.
pub fn parse_block<I>(tokens: &mut TokenStream<I>) -> ParseResult<Block>
    where I: Iterator<Item = (Token, usize)> + Clone
{
    tokens.require(&Token::LBrace)?;
    tokens.enter_block()?;

    let block = parse_block_body(tokens)?;
    tokens.leave_block();

    Ok(block)
}

fn parse_block_body<I>(tokens: &mut TokenStream<I>) -> ParseResult<Block>
    where I: Iterator<Item = (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some(Token::RBrace) => break,
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(tokens.missing("'}'")),
        }
    }

    let Some(block) = Block::new(statements) else {
        return Err(tokens.empty_block());
    };

    if !tokens.check_for(&Token::RBrace) {
        return Err(tokens.missing("'}'"));
    }

    Ok(block)
}
