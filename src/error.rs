/// Parsing errors.
///
/// Defines the syntax errors the parser can raise. Every parse error carries
/// the line it was detected on and a short window of the tokens that follow,
/// so the message points at the offending text.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while stepping a program: an actuator refusing
/// an action, and attempts to resume an execution that has already halted.
pub mod runtime_error;
/// Loading errors.
///
/// Separates a missing or unreadable source file from a file that was read
/// but failed to parse.
pub mod load_error;

pub use load_error::LoadError;
pub use parse_error::ParseError;
pub use runtime_error::{RunError, RuntimeError};
