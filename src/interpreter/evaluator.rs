/// Stepping logic.
///
/// Defines the resumable [`Execution`] cursor, the single-step operation and
/// the drivers built on top of it.
pub mod core;

/// Execution frames.
///
/// A frame records one statement sequence being walked and where the walk
/// stands in it. Loop bodies are frames that rewind instead of finishing.
pub mod frame;

pub use self::core::{Execution, RunSummary, Step};
