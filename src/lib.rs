//! # robodsl
//!
//! robodsl parses and runs programs written in a small language for driving
//! a robot. A program is a sequence of actions (`move;`, `turnL;`, `turnR;`,
//! `takeFuel;`, `wait;`) and unconditional `loop { ... }` blocks.
//!
//! Programs are executed one action at a time, so a scheduler can pace the
//! robot and stop a program that loops forever.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fs, io::ErrorKind, path::Path};

use log::info;

use crate::{
    ast::Program,
    error::{LoadError, ParseError, RunError},
    interpreter::{
        actuator::Actuator,
        evaluator::{Execution, RunSummary},
        lexer::Tokenizer,
        parser::{core::parse_program, utils::TokenStream},
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the `Program`, `Statement`, `Block` and `Action`
/// types that represent a parsed program as a tree. The tree is built once
/// by the parser and is read-only afterwards.
///
/// # Responsibilities
/// - Defines the node types of the language.
/// - Guarantees that blocks are never empty.
/// - Renders trees back to source text.
pub mod ast;
/// Provides error types for parsing, loading and execution.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attaches line numbers and following tokens to syntax errors.
pub mod error;
/// Orchestrates tokenizing, parsing and stepping programs.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and actuator.
/// - Exposes the resumable execution engine.
pub mod interpreter;

/// Parses a source string into a [`Program`].
///
/// # Errors
/// Returns the first syntax error in the source.
///
/// # Examples
/// ```
/// use robodsl::{error::ParseError, parse_source};
///
/// let program = parse_source("move; turnL; wait;").unwrap();
/// assert_eq!(program.statements().len(), 3);
///
/// let error = parse_source("loop { }").unwrap_err();
/// assert!(matches!(error, ParseError::EmptyBlock { .. }));
/// ```
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    parse_program(&mut TokenStream::new(Tokenizer::new(source)))
}

/// Reads a source file in full and parses it.
///
/// # Errors
/// - `LoadError::NotFound` if the file does not exist.
/// - `LoadError::Io` if it exists but cannot be read.
/// - `LoadError::Parse` if it is not a valid program.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| {
                                              if source.kind() == ErrorKind::NotFound {
                                                  LoadError::NotFound { path: path.to_path_buf() }
                                              } else {
                                                  LoadError::Io { path: path.to_path_buf(),
                                                                  source }
                                              }
                                          })?;

    info!("parsing {}", path.display());

    Ok(parse_source(&source)?)
}

/// Parses `source` and steps it against `actuator`.
///
/// Stops when the program finishes or after `max_steps` actions.
///
/// # Errors
/// Returns the syntax error if the source does not parse, or the actuator's
/// refusal if the run is halted.
///
/// # Examples
/// ```
/// use robodsl::{ast::Action, interpreter::actuator::Recorder, run_source};
///
/// let mut recorder = Recorder::new();
/// let summary = run_source("loop { move; turnR; }", &mut recorder, 5).unwrap();
///
/// assert_eq!(summary.steps, 5);
/// assert!(!summary.finished);
/// assert_eq!(recorder.calls()[4], Action::Move);
/// ```
pub fn run_source<A>(source: &str,
                     actuator: &mut A,
                     max_steps: usize)
                     -> Result<RunSummary, RunError<A::Error>>
    where A: Actuator + ?Sized
{
    let program = parse_source(source)?;

    Ok(Execution::new(&program).run(actuator, max_steps)?)
}
