/// Block parsing.
///
/// Parses brace-delimited statement sequences and enforces that a block is
/// never empty.
pub mod block;
/// Parser entry point.
///
/// Defines the shared result type and the top-level program production.
pub mod core;
/// Statement parsing.
///
/// Dispatches on the next token to the loop or action production.
pub mod statement;
/// Token stream and parsing primitives.
///
/// Provides the one-token-lookahead stream the productions consume, the
/// `require` and `check_for` primitives, and the diagnostic context window.
pub mod utils;
