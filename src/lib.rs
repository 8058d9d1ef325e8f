//! # mars-rover
//!
//! Simulates a single rover on a rectangular plateau. Raw console text is
//! validated into typed values ([`Heading`], [`Command`], bounds and positions),
//! which then drive the [`MarsRover`] state machine: quarter turns through
//! `N, E, S, W` and unit moves clamped to the plateau edges.

pub mod display;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod mission;
pub mod rover;
pub mod validation;

pub use error::*;
pub use interpreter::*;
pub use mission::*;
pub use rover::*;
pub use validation::*;
