use log::debug;

use crate::{ast::Action, interpreter::actuator::Actuator};

/// Errors a [`Recorder`] can signal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecorderError {
    /// The tank is empty.
    #[error("out of fuel after {actions} actions")]
    OutOfFuel {
        /// Actions recorded before the tank ran dry.
        actions: usize,
    },
}

/// A simple fuel model: every `move` burns fuel, `takeFuel` refills the tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelTank {
    /// Fuel units the tank holds when full.
    pub capacity: u32,
    /// Fuel units currently in the tank.
    pub level:    u32,
    /// Fuel units burnt by each `move`.
    pub per_move: u32,
}

impl FuelTank {
    /// A full tank of the given capacity, burning one unit per move.
    #[must_use]
    pub const fn full(capacity: u32) -> Self {
        Self { capacity,
               level: capacity,
               per_move: 1 }
    }
}

/// An actuator that remembers every call it receives.
///
/// Without a fuel tank it accepts every action forever. With one, each
/// `move` burns fuel and `takeFuel` fills the tank back up. A robot whose
/// tank runs dry is stranded: [`Actuator::ready`] reports
/// [`RecorderError::OutOfFuel`] from then on, so it has to refuel before the
/// last unit is burnt.
///
/// # Example
/// ```
/// use robodsl::{ast::Action, interpreter::actuator::{Actuator, Recorder}};
///
/// let mut recorder = Recorder::new();
/// recorder.move_forward().unwrap();
/// recorder.idle_wait().unwrap();
/// assert_eq!(recorder.calls(), &[Action::Move, Action::Wait]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    calls: Vec<Action>,
    fuel:  Option<FuelTank>,
}

impl Recorder {
    /// A recorder with no fuel limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose moves are limited by `tank`.
    #[must_use]
    pub const fn with_fuel(tank: FuelTank) -> Self {
        Self { calls: Vec::new(),
               fuel:  Some(tank), }
    }

    /// Every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> &[Action] {
        &self.calls
    }

    /// The fuel tank, if the recorder has one.
    #[must_use]
    pub const fn fuel(&self) -> Option<FuelTank> {
        self.fuel
    }

    /// Forgets all recorded calls and refills the tank.
    pub fn reset(&mut self) {
        self.calls.clear();
        if let Some(tank) = &mut self.fuel {
            tank.level = tank.capacity;
        }
    }

    fn record(&mut self, action: Action) -> Result<(), RecorderError> {
        match (action, &mut self.fuel) {
            (Action::Move, Some(tank)) => {
                if tank.level == 0 {
                    return Err(RecorderError::OutOfFuel { actions: self.calls.len() });
                }
                tank.level = tank.level.saturating_sub(tank.per_move);
            },
            (Action::TakeFuel, Some(tank)) => tank.level = tank.capacity,
            _ => {},
        }

        debug!("recorded {action}");
        self.calls.push(action);

        Ok(())
    }
}

impl Actuator for Recorder {
    type Error = RecorderError;

    fn ready(&self) -> Result<(), Self::Error> {
        match self.fuel {
            Some(tank) if tank.level == 0 => {
                Err(RecorderError::OutOfFuel { actions: self.calls.len() })
            },
            _ => Ok(()),
        }
    }

    fn move_forward(&mut self) -> Result<(), Self::Error> {
        self.record(Action::Move)
    }

    fn turn_left(&mut self) -> Result<(), Self::Error> {
        self.record(Action::TurnLeft)
    }

    fn turn_right(&mut self) -> Result<(), Self::Error> {
        self.record(Action::TurnRight)
    }

    fn take_fuel(&mut self) -> Result<(), Self::Error> {
        self.record(Action::TakeFuel)
    }

    fn idle_wait(&mut self) -> Result<(), Self::Error> {
        self.record(Action::Wait)
    }
}
