use log::{debug, warn};

use crate::{
    ast::{Action, Program, Statement},
    error::RuntimeError,
    interpreter::{actuator::Actuator, evaluator::frame::Frame},
};

/// Result type used by the evaluator, generic over the actuator's error.
pub type StepResult<T, E> = Result<T, RuntimeError<E>>;

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One action was performed on the actuator.
    Performed(Action),
    /// The program has no actions left. Further steps keep returning this.
    Finished,
}

/// Summary of a bounded run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Actions performed during the run.
    pub steps:    usize,
    /// Whether the program ran out of actions.
    pub finished: bool,
}

/// A resumable walk over a [`Program`].
///
/// The walk is an explicit stack of [`Frame`]s instead of native recursion.
/// Each call to [`Execution::step`] performs exactly one action and hands
/// control back, so a scheduler decides when, and whether, the program
/// continues. Loop bodies rewind their frame in place, so the stack never
/// grows deeper than the nesting of the program, however many iterations
/// run.
///
/// Stepping is deterministic: a fresh `Execution` over the same program
/// produces the same sequence of actions.
///
/// # Example
/// ```
/// use robodsl::{
///     ast::Action,
///     interpreter::{
///         actuator::Recorder,
///         evaluator::{Execution, Step},
///     },
///     parse_source,
/// };
///
/// let program = parse_source("loop { move; turnR; }").unwrap();
/// let mut execution = Execution::new(&program);
/// let mut recorder = Recorder::new();
///
/// for _ in 0..5 {
///     assert!(matches!(execution.step(&mut recorder), Ok(Step::Performed(_))));
/// }
///
/// assert_eq!(recorder.calls(),
///            &[Action::Move, Action::TurnRight, Action::Move, Action::TurnRight, Action::Move]);
/// ```
#[derive(Debug, Clone)]
pub struct Execution<'p> {
    frames: Vec<Frame<'p>>,
    steps:  usize,
    halted: bool,
}

impl<'p> Execution<'p> {
    /// Positions a new execution before the first statement of `program`.
    #[must_use]
    pub fn new(program: &'p Program) -> Self {
        Self { frames: vec![Frame::once(program.statements())],
               steps:  0,
               halted: false, }
    }

    /// Performs the next action of the program.
    ///
    /// Before the action is issued the actuator is asked whether it is
    /// [`ready`](Actuator::ready). If it is not, or if the action itself
    /// fails, the execution halts and the actuator's error is returned.
    ///
    /// # Returns
    /// - `Step::Performed(action)` after one actuator call.
    /// - `Step::Finished` once no actions remain.
    ///
    /// # Errors
    /// - `RuntimeError::Actuator` if the actuator refused the action.
    /// - `RuntimeError::Halted` on any step after such a refusal.
    pub fn step<A>(&mut self, actuator: &mut A) -> StepResult<Step, A::Error>
        where A: Actuator + ?Sized
    {
        if self.halted {
            return Err(RuntimeError::Halted { steps: self.steps });
        }

        let Some(action) = self.next_action() else {
            return Ok(Step::Finished);
        };

        if let Err(source) = actuator.ready().and_then(|()| perform(action, actuator)) {
            self.halted = true;
            warn!("actuator refused `{action}` after {} steps: {source}", self.steps);

            return Err(RuntimeError::Actuator { action,
                                                steps: self.steps,
                                                source });
        }

        self.steps += 1;
        debug!("step {}: {action}", self.steps);

        Ok(Step::Performed(action))
    }

    /// Steps until the program finishes or `max_steps` actions have been
    /// performed, whichever comes first.
    ///
    /// # Errors
    /// Propagates the first error returned by [`Execution::step`].
    pub fn run<A>(&mut self, actuator: &mut A, max_steps: usize) -> StepResult<RunSummary, A::Error>
        where A: Actuator + ?Sized
    {
        let mut steps = 0;

        while steps < max_steps {
            match self.step(actuator)? {
                Step::Performed(_) => steps += 1,
                Step::Finished => return Ok(RunSummary { steps,
                                                         finished: true }),
            }
        }

        Ok(RunSummary { steps,
                        finished: self.is_finished() })
    }

    /// Steps until the program finishes.
    ///
    /// A program without loops always finishes. A program with a loop only
    /// returns once the actuator refuses an action.
    ///
    /// # Returns
    /// The number of actions performed.
    ///
    /// # Errors
    /// Propagates the first error returned by [`Execution::step`].
    pub fn run_to_end<A>(&mut self, actuator: &mut A) -> StepResult<usize, A::Error>
        where A: Actuator + ?Sized
    {
        let start = self.steps;
        while let Step::Performed(_) = self.step(actuator)? {}

        Ok(self.steps - start)
    }

    /// Actions performed so far.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Returns `true` once an actuator error has stopped the execution.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns `true` if no further step can perform an action.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.frames.iter().any(Frame::has_pending_action)
    }

    /// Current depth of the frame stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Index path of the most recently performed (or refused) action.
    ///
    /// The path can be resolved with [`Program::statement_at`]. Returns
    /// `None` before the first step and after the program has finished.
    #[must_use]
    pub fn path(&self) -> Option<Vec<usize>> {
        let untouched = self.frames.iter().all(|frame| frame.next == 0 && frame.iteration == 0);
        if self.frames.is_empty() || untouched {
            return None;
        }

        Some(self.frames.iter().map(|frame| frame.next.saturating_sub(1)).collect())
    }

    /// Moves the cursor past the next action and returns it.
    ///
    /// Finished frames are popped, loop frames rewound, and loops entered by
    /// pushing a frame for their body. A loop body that completes a full pass
    /// without performing any action can never perform one, so its frame is
    /// dropped rather than rewound forever.
    fn next_action(&mut self) -> Option<Action> {
        loop {
            let depth = self.frames.len();
            let frame = self.frames.last_mut()?;

            let Some(statement) = frame.advance() else {
                if frame.repeat && frame.productive {
                    frame.rewind();
                    debug!("loop at depth {depth} starting iteration {}", frame.iteration);
                } else {
                    if frame.repeat {
                        warn!("abandoning loop at depth {depth} that performs no actions");
                    }
                    self.frames.pop();
                }
                continue;
            };

            match statement {
                Statement::Action(action) => {
                    for frame in &mut self.frames {
                        frame.productive = true;
                    }
                    return Some(*action);
                },
                Statement::Loop(block) => self.frames.push(Frame::repeating(block.statements())),
                Statement::Nop => {},
            }
        }
    }
}

impl Program {
    /// Executes the whole program against `actuator`.
    ///
    /// Equivalent to stepping a fresh [`Execution`] until it finishes. For a
    /// program with a loop this only returns when the actuator refuses an
    /// action; use [`Execution`] to drive such programs a step at a time.
    ///
    /// # Returns
    /// The number of actions performed.
    ///
    /// # Errors
    /// Returns the actuator's refusal, if any.
    pub fn execute<A>(&self, actuator: &mut A) -> StepResult<usize, A::Error>
        where A: Actuator + ?Sized
    {
        Execution::new(self).run_to_end(actuator)
    }
}

/// Issues the actuator call an action stands for.
fn perform<A>(action: Action, actuator: &mut A) -> Result<(), A::Error>
    where A: Actuator + ?Sized
{
    match action {
        Action::Move => actuator.move_forward(),
        Action::TurnLeft => actuator.turn_left(),
        Action::TurnRight => actuator.turn_right(),
        Action::TakeFuel => actuator.take_fuel(),
        Action::Wait => actuator.idle_wait(),
    }
}
