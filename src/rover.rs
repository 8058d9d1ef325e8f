//! Rover state and the heading/translation primitives it is built from.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A point on the plateau. Coordinates may be fractional.
pub type Position = DVec2;

/// The inclusive upper corner `(max_x, max_y)` of the plateau. The lower corner is always the origin.
pub type PlateauBounds = DVec2;

/// Cardinal facing of the rover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    N,
    E,
    S,
    W,
}

impl Heading {
    /// All headings in clockwise order. Turning right walks this array forwards.
    pub const ALL: [Heading; 4] = [Heading::N, Heading::E, Heading::S, Heading::W];

    fn index(self) -> usize {
        match self {
            Heading::N => 0,
            Heading::E => 1,
            Heading::S => 2,
            Heading::W => 3,
        }
    }

    /// The heading one quarter turn counter-clockwise.
    pub fn left(self) -> Heading {
        let idx = self.index();
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    /// The heading one quarter turn clockwise.
    pub fn right(self) -> Heading {
        let idx = self.index();
        if idx == Self::ALL.len() - 1 {
            Self::ALL[0]
        } else {
            Self::ALL[idx + 1]
        }
    }

    /// Unit displacement for one step along this heading.
    pub fn forward(self) -> DVec2 {
        match self {
            Heading::N => DVec2::Y,
            Heading::E => DVec2::X,
            Heading::S => DVec2::NEG_Y,
            Heading::W => DVec2::NEG_X,
        }
    }

    /// Canonical single-letter form.
    pub fn symbol(self) -> char {
        match self {
            Heading::N => 'N',
            Heading::E => 'E',
            Heading::S => 'S',
            Heading::W => 'W',
        }
    }

    /// Full compass name, e.g. `"North"`.
    pub fn name(self) -> &'static str {
        match self {
            Heading::N => "North",
            Heading::E => "East",
            Heading::S => "South",
            Heading::W => "West",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Heading {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validation::parse_direction(s)
    }
}

/// The complete mutable state of a rover on its plateau.
///
/// A fresh state sits at the origin, facing north, on a degenerate `0x0` plateau.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoverState {
    /// Current position. Kept inside `[0, bounds]` by every move.
    pub position: Position,

    /// Inclusive upper corner of the plateau.
    pub bounds: PlateauBounds,

    /// Current facing.
    pub heading: Heading,
}

impl RoverState {
    /// Rotates a quarter turn counter-clockwise. Position is untouched.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    /// Rotates a quarter turn clockwise. Position is untouched.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// Advances `step` units along the current heading, then clamps each axis to the plateau.
    ///
    /// The floor at zero is applied before the ceiling at the bound, so a
    /// negative bound (never produced by validation) collapses the axis onto it.
    /// Hitting an edge is silent.
    pub fn move_forward(&mut self, step: f64) {
        let target = self.position + self.heading.forward() * step;
        self.position = target.max(DVec2::ZERO).min(self.bounds);
    }

    /// Returns every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
