use crate::ast::Statement;

/// One statement sequence on the execution stack.
///
/// The program body is a one-shot frame: it is popped once its last
/// statement has run. A loop body is a repeating frame: reaching the end
/// rewinds it to the first statement and starts a new iteration.
#[derive(Debug, Clone)]
pub struct Frame<'p> {
    /// The statements being walked.
    pub statements: &'p [Statement],
    /// Index of the next statement to run.
    pub next:       usize,
    /// Whether the frame rewinds at the end instead of finishing.
    pub repeat:     bool,
    /// Completed passes over the statements.
    pub iteration:  usize,
    /// Whether the current pass has performed any action so far.
    pub productive: bool,
}

impl<'p> Frame<'p> {
    /// A frame that runs `statements` once.
    #[must_use]
    pub const fn once(statements: &'p [Statement]) -> Self {
        Self { statements,
               next: 0,
               repeat: false,
               iteration: 0,
               productive: false }
    }

    /// A frame that runs `statements` over and over.
    #[must_use]
    pub const fn repeating(statements: &'p [Statement]) -> Self {
        Self { repeat: true,
               ..Self::once(statements) }
    }

    /// Takes the next statement, if the current pass has one left.
    pub fn advance(&mut self) -> Option<&'p Statement> {
        let statement = self.statements.get(self.next)?;
        self.next += 1;

        Some(statement)
    }

    /// Starts the next pass over the statements.
    pub const fn rewind(&mut self) {
        self.next = 0;
        self.iteration += 1;
        self.productive = false;
    }

    /// Returns `true` if running the rest of this frame, including any
    /// further passes, can still perform an action.
    #[must_use]
    pub fn has_pending_action(&self) -> bool {
        let remaining = self.statements.get(self.next..).unwrap_or_default();

        remaining.iter().any(|statement| statement.action_count() > 0)
        || (self.repeat && self.statements.iter().any(|statement| statement.action_count() > 0))
    }
}
