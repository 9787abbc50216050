use log::debug;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{statement::parse_statement, utils::TokenStream},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// This is the entry point for parsing. Statements are parsed one after the
/// other until no tokens remain; the first error aborts the parse and no
/// partial program is returned.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the source.
///
/// # Returns
/// The parsed program, empty if the source held no tokens.
///
/// # Example
/// ```
/// use robodsl::interpreter::{
///     lexer::Tokenizer,
///     parser::{core::parse_program, utils::TokenStream},
/// };
///
/// let program = parse_program(&mut TokenStream::new(Tokenizer::new("move; wait;"))).unwrap();
/// assert_eq!(program.statements().len(), 2);
/// ```
pub fn parse_program<I>(tokens: &mut TokenStream<I>) -> ParseResult<Program>
    where I: Iterator<Item = (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }

    debug!("parsed program with {} top-level statements", statements.len());

    Ok(Program::new(statements))
}
