use crate::{ast::Action, error::ParseError};

/// Represents all errors that can occur while stepping a program.
///
/// `E` is the error type of the actuator being driven.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError<E> {
    /// The actuator signalled an abnormal condition instead of performing
    /// the next action.
    #[error("actuator refused `{action}` after {steps} steps: {source}")]
    Actuator {
        /// The action that was about to be, or was being, performed.
        action: Action,
        /// Actions completed before the refusal.
        steps:  usize,
        /// The condition reported by the actuator.
        #[source]
        source: E,
    },
    /// The execution was halted by an earlier error and cannot resume.
    #[error("execution halted after {steps} steps and cannot resume")]
    Halted {
        /// Actions completed before the halt.
        steps: usize,
    },
}

/// Errors from parsing and then running a source string in one go.
#[derive(Debug, thiserror::Error)]
pub enum RunError<E> {
    /// The source did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program parsed but the actuator stopped it.
    #[error(transparent)]
    Runtime(#[from] RuntimeError<E>),
}
