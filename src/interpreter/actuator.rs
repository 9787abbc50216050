/// In-memory actuator that records every call and optionally tracks fuel.
pub mod recorder;

pub use recorder::{FuelTank, Recorder, RecorderError};

/// The external device a program drives.
///
/// Each primitive represents one discrete, externally visible effect and
/// consumes one scheduling step. The surrounding simulation owns the
/// actuator; the interpreter only borrows it for the duration of a step.
pub trait Actuator {
    /// The abnormal condition this actuator can signal, such as running out
    /// of fuel.
    type Error: std::error::Error + 'static;

    /// Reports whether the actuator can accept another action.
    ///
    /// Called before every action. An error here is a terminal condition:
    /// the interpreter surfaces it instead of invoking the action.
    ///
    /// # Errors
    /// Returns the condition that prevents further actions.
    fn ready(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Moves one cell forward.
    fn move_forward(&mut self) -> Result<(), Self::Error>;

    /// Turns ninety degrees to the left.
    fn turn_left(&mut self) -> Result<(), Self::Error>;

    /// Turns ninety degrees to the right.
    fn turn_right(&mut self) -> Result<(), Self::Error>;

    /// Picks up fuel at the current position.
    fn take_fuel(&mut self) -> Result<(), Self::Error>;

    /// Does nothing for one step.
    fn idle_wait(&mut self) -> Result<(), Self::Error>;
}
