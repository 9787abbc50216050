use log::debug;

use crate::{
    ast::{Action, Statement},
    interpreter::{
        lexer::Token,
        parser::{block::parse_block, core::ParseResult, utils::TokenStream},
    },
};

/// Parses a single statement.
///
/// A statement is either a loop or an action. One token of lookahead decides
/// which: `loop` starts a loop, an action keyword starts an action, and
/// anything else (including the end of input) is an invalid statement.
///
/// Grammar: `statement := loop | action`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a statement.
///
/// # Returns
/// The parsed [`Statement`].
///
/// # Errors
/// - `InvalidStatement` if the next token cannot start a statement.
/// - Propagates any error from the loop or action productions.
pub fn parse_statement<I>(tokens: &mut TokenStream<I>) -> ParseResult<Statement>
    where I: Iterator<Item = (Token, usize)> + Clone
{
    match tokens.peek() {
        Some(Token::Loop) => parse_loop(tokens),
        Some(token) if action_for(token).is_some() => parse_action(tokens),
        _ => Err(tokens.invalid_statement()),
    }
}

/// Parses a loop.
///
/// Grammar: `loop := "loop" block`
///
/// # Errors
/// - `Missing` if the `loop` keyword is absent.
/// - Propagates any error from the block.
pub fn parse_loop<I>(tokens: &mut TokenStream<I>) -> ParseResult<Statement>
    where I: Iterator<Item = (Token, usize)> + Clone
{
    let line = tokens.line();
    tokens.require(&Token::Loop)?;
    debug!("parsing loop on line {line}");

    Ok(Statement::Loop(parse_block(tokens)?))
}

/// Parses an action and its terminating semicolon.
///
/// Grammar: `action := ("move" | "turnL" | "turnR" | "takeFuel" | "wait") ";"`
///
/// # Errors
/// - `Missing` if the next token is not an action keyword.
/// - `Missing` if the `;` after the keyword is absent.
pub fn parse_action<I>(tokens: &mut TokenStream<I>) -> ParseResult<Statement>
    where I: Iterator<Item = (Token, usize)> + Clone
{
    let Some(action) = check_for_action(tokens) else {
        return Err(tokens.missing("an action"));
    };

    tokens.require(&Token::Semicolon)?;

    Ok(Statement::Action(action))
}

/// Consumes the next token if it is an action keyword and returns its action.
fn check_for_action<I>(tokens: &mut TokenStream<I>) -> Option<Action>
    where I: Iterator<Item = (Token, usize)> + Clone
{
    let action = tokens.peek().and_then(action_for)?;
    tokens.next_token();

    Some(action)
}

const fn action_for(token: &Token) -> Option<Action> {
    match token {
        Token::Move => Some(Action::Move),
        Token::TurnL => Some(Action::TurnLeft),
        Token::TurnR => Some(Action::TurnRight),
        Token::TakeFuel => Some(Action::TakeFuel),
        Token::Wait => Some(Action::Wait),
        _ => None,
    }
}
