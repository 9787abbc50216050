/// The actuator module defines the device a program drives.
///
/// Action nodes bottom out in calls on an [`actuator::Actuator`]. The
/// surrounding simulation provides the real implementation; this module
/// ships the trait and an in-memory recorder.
///
/// # Responsibilities
/// - Declares the five primitive operations and the readiness check.
/// - Provides [`actuator::Recorder`] for the command line and for tests.
pub mod actuator;
/// The evaluator module executes programs one action at a time.
///
/// The evaluator walks the AST with an explicit, resumable cursor so that an
/// unconditional loop never blocks its caller. Each step performs exactly one
/// actuator call and returns.
///
/// # Responsibilities
/// - Advances execution depth-first, left to right.
/// - Rewinds loop bodies in place, keeping memory bounded.
/// - Halts and reports when the actuator signals a terminal condition.
pub mod evaluator;
/// The lexer module tokenizes source code for the parser.
///
/// The lexer splits the raw source text at whitespace and at the punctuation
/// characters `{ } ( ) , ;`, producing keywords, numerals, punctuation and
/// plain words. It never fails; malformed input is left for the parser to
/// reject.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Offers a lazy, cloneable token stream.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per grammar rule and one
/// token of lookahead. The first grammar violation aborts the parse.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Program`] trees.
/// - Reports the violated expectation with a window of following tokens.
pub mod parser;
