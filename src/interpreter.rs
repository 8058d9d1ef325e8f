//! The rover command interpreter.
//!
//! The entry point is [`MarsRover`]. Configure it with a [`RoverConfig`], place it
//! with [`MarsRover::set_bounds`] and [`MarsRover::set_position`], then drive it with
//! [`MarsRover::execute`] or [`MarsRover::execute_sequence`].

use crate::error::RoverError;
use crate::mission::{Mission, MissionReport};
use crate::rover::{Heading, PlateauBounds, Position, RoverState};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

/// A single rover instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Quarter turn counter-clockwise (`L`).
    Left,
    /// Quarter turn clockwise (`R`).
    Right,
    /// One step along the current heading (`M`).
    Move,
}

impl Command {
    /// The console letter for this command.
    pub fn symbol(self) -> char {
        match self {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Move => 'M',
        }
    }

    /// Short human-readable description, e.g. `"turn Left"`.
    pub fn description(self) -> &'static str {
        match self {
            Command::Left => "turn Left",
            Command::Right => "turn Right",
            Command::Move => "Move forward",
        }
    }
}

impl TryFrom<char> for Command {
    type Error = RoverError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'M' => Ok(Command::Move),
            other => Err(RoverError::InvalidCommand(other)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Configuration for rover movement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoverConfig {
    /// Distance covered by one `M` command. Default: 1.
    pub step: f64,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self { step: 1.0 }
    }
}

/// A rover on a plateau, driven one command at a time.
///
/// The rover owns its [`RoverState`] outright. Accessors hand out copies, and a
/// single instance can be reused across missions via [`reset`](Self::reset).
/// There is no internal locking; wrap it in a mutex to share it between threads.
#[derive(Clone, Debug, Default)]
pub struct MarsRover {
    state: RoverState,
    config: RoverConfig,
}

impl MarsRover {
    /// Creates a rover at the origin, facing north, on a `0x0` plateau.
    pub fn new(config: RoverConfig) -> Self {
        Self {
            state: RoverState::default(),
            config,
        }
    }

    /// Movement configuration this rover was built with.
    pub fn config(&self) -> &RoverConfig {
        &self.config
    }

    /// Copy of the current position.
    pub fn position(&self) -> Position {
        self.state.position
    }

    /// Copy of the plateau bounds.
    pub fn bounds(&self) -> PlateauBounds {
        self.state.bounds
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.state.heading
    }

    /// Snapshot of the whole state.
    pub fn state(&self) -> RoverState {
        self.state
    }

    /// Overwrites the plateau bounds. Values are taken as already validated.
    pub fn set_bounds(&mut self, max_x: f64, max_y: f64) {
        debug!(max_x, max_y, "plateau bounds set");
        self.state.bounds = DVec2::new(max_x, max_y);
    }

    /// Overwrites position and heading.
    ///
    /// The position is not checked against the bounds; an out-of-range start is
    /// kept as-is until the next move clamps it.
    pub fn set_position(&mut self, x: f64, y: f64, heading: Heading) {
        debug!(x, y, %heading, "rover placed");
        self.state.position = DVec2::new(x, y);
        self.state.heading = heading;
    }

    /// Turns a quarter turn counter-clockwise.
    pub fn turn_left(&mut self) {
        self.state.turn_left();
    }

    /// Turns a quarter turn clockwise.
    pub fn turn_right(&mut self) {
        self.state.turn_right();
    }

    /// Moves one configured step along the heading, clamped to the plateau.
    pub fn move_forward(&mut self) {
        self.state.move_forward(self.config.step);
    }

    /// Applies one command.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Left => self.turn_left(),
            Command::Right => self.turn_right(),
            Command::Move => self.move_forward(),
        }
        trace!(
            %command,
            x = self.state.position.x,
            y = self.state.position.y,
            heading = %self.state.heading,
            "command executed"
        );
    }

    /// Applies `commands` in order.
    pub fn execute_sequence<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.execute(command);
        }
    }

    /// Applies one raw command tag.
    ///
    /// Fails with [`RoverError::InvalidCommand`] for anything outside `L`, `R`, `M`,
    /// leaving the state untouched.
    pub fn execute_symbol(&mut self, symbol: char) -> Result<(), RoverError> {
        let command = Command::try_from(symbol).inspect_err(|_| {
            warn!(%symbol, "rejected command tag");
        })?;
        self.execute(command);
        Ok(())
    }

    /// Applies raw command tags left to right and returns how many were applied.
    ///
    /// Stops at the first invalid tag. Commands before it stay applied.
    pub fn execute_symbols(&mut self, symbols: &str) -> Result<usize, RoverError> {
        let mut applied = 0;
        for symbol in symbols.chars() {
            self.execute_symbol(symbol)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Restores the origin, a `0x0` plateau and a northward heading. The config is kept.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Runs a whole mission on a freshly reset rover and reports where it ended up.
    pub fn run(&mut self, mission: &Mission) -> MissionReport {
        self.reset();
        self.set_bounds(mission.bounds.x, mission.bounds.y);
        self.set_position(mission.start.x, mission.start.y, mission.heading);
        self.execute_sequence(mission.commands.iter().copied());

        let report = MissionReport::from(self.state);
        debug!(
            commands = mission.commands.len(),
            x = report.position.x,
            y = report.position.y,
            heading = %report.heading,
            "mission complete"
        );
        report
    }
}
