//! Whole missions: parsing the three console inputs and reporting the outcome.

use crate::error::ValidationResult;
use crate::interpreter::Command;
use crate::rover::{Heading, PlateauBounds, Position, RoverState};
use crate::validation::{
    parse_command_sequence, parse_direction, parse_number, parse_plateau_fields,
    parse_position_fields,
};
use serde::{Deserialize, Serialize};

/// A fully validated mission: plateau, starting pose and the commands to run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub bounds: PlateauBounds,
    pub start: Position,
    pub heading: Heading,
    pub commands: Vec<Command>,
}

impl Mission {
    /// Parses the three console inputs of a mission: `"5,5"`, `"1,2,N"` and `"LMLMLMLMM"`.
    pub fn parse(plateau: &str, position: &str, commands: &str) -> ValidationResult<Self> {
        let bounds = Self::parse_bounds(plateau)?;
        let (start, heading) = Self::parse_start(position)?;
        let commands = parse_command_sequence(commands)?;
        Ok(Self {
            bounds,
            start,
            heading,
            commands,
        })
    }

    /// Parses `width,height`.
    pub fn parse_bounds(raw: &str) -> ValidationResult<PlateauBounds> {
        let (w, h) = parse_plateau_fields(raw)?;
        let width = parse_number(w, "Plateau width")?;
        let height = parse_number(h, "Plateau height")?;
        Ok(PlateauBounds::new(width, height))
    }

    /// Parses `x,y,heading`.
    pub fn parse_start(raw: &str) -> ValidationResult<(Position, Heading)> {
        let (x, y, h) = parse_position_fields(raw)?;
        let x = parse_number(x, "X coordinate")?;
        let y = parse_number(y, "Y coordinate")?;
        let heading = parse_direction(h)?;
        Ok((Position::new(x, y), heading))
    }
}

/// Where the rover ended up after a mission.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionReport {
    pub position: Position,
    pub heading: Heading,
    pub bounds: PlateauBounds,
}

impl From<RoverState> for MissionReport {
    fn from(state: RoverState) -> Self {
        Self {
            position: state.position,
            heading: state.heading,
            bounds: state.bounds,
        }
    }
}
