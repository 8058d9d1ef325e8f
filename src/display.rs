//! Console text for the interactive simulator.
//!
//! Everything here builds a `String`; printing is left to the binary.

use crate::interpreter::Command;
use crate::mission::MissionReport;
use crate::rover::{Heading, PlateauBounds, Position};
use std::fmt::Write as _;

const RULE: &str = "================================================================================";

pub const PLATEAU_PROMPT: &str = "Enter plateau size (width,height): ";
pub const POSITION_PROMPT: &str = "Enter rover's starting position (x,y,direction): ";
pub const COMMANDS_PROMPT: &str = "Enter command sequence: ";

/// Formats a coordinate without a trailing `.0` when it is integral.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn format_pair(v: glam::DVec2) -> String {
    format!("{},{}", format_number(v.x), format_number(v.y))
}

pub fn header() -> String {
    format!("{RULE}\n{:^80}\n{RULE}\n", "MARS ROVER SIMULATOR")
}

pub fn plateau_step() -> String {
    [
        "STEP 1: Define the Plateau",
        "   The plateau is a rectangular grid where the rover will navigate.",
        "   Enter the maximum coordinates (width,height) - e.g., 5,5 creates a 6x6 grid (0-5)",
        "",
    ]
    .join("\n")
}

pub fn position_step() -> String {
    let names = Heading::ALL
        .iter()
        .map(|h| format!("{h}={}", h.name()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "STEP 2: Position the Rover\n   Enter x,y,direction (e.g., 1,2,N means position (1,2) facing North)\n   Directions: {names}\n"
    )
}

pub fn commands_step() -> String {
    let legend = [Command::Left, Command::Right, Command::Move]
        .iter()
        .map(|c| format!("{c} = {}", c.description()))
        .collect::<Vec<_>>()
        .join("    ");
    format!(
        "STEP 3: Control the Mars Rover\n   Send a sequence of commands to move your rover:\n   {legend}\n   Example: LMLMLMLMM\n"
    )
}

pub fn plateau_set(bounds: PlateauBounds) -> String {
    let w = format_number(bounds.x);
    let h = format_number(bounds.y);
    format!("Plateau set to {w}x{h} (coordinates: 0,0 to {w},{h})\n")
}

pub fn rover_placed(position: Position, heading: Heading) -> String {
    format!("Rover positioned at ({}) facing {heading}\n", format_pair(position))
}

pub fn mission_complete(report: &MissionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nMISSION COMPLETE!\n{RULE}");
    let _ = writeln!(out, "Mars Rover Final Position:");
    let _ = writeln!(
        out,
        "   Coordinates: ({}, {})",
        format_number(report.position.x),
        format_number(report.position.y)
    );
    let _ = writeln!(
        out,
        "   Direction: {} ({})",
        report.heading,
        report.heading.name()
    );
    let _ = writeln!(
        out,
        "   Plateau: {}x{}",
        format_number(report.bounds.x),
        format_number(report.bounds.y)
    );
    let _ = writeln!(out, "{RULE}\n\nReady for next mission! Press Ctrl+D or Ctrl+C to exit.");
    out
}

pub fn error_block(error: &dyn std::error::Error) -> String {
    format!("\n{error}\n\nLet's try again...\n")
}
