//! Console front end for the Mars rover simulator.
//!
//! With `--plateau`, `--position` and `--commands` all given, runs one mission and
//! prints the final report. Otherwise runs the interactive mission loop until EOF.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;
use mars_rover::display;
use mars_rover::{MarsRover, Mission, MissionReport, RoverConfig, ValidationResult, logging};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "mars-rover")]
#[command(about = "Navigate a rover across a rectangular plateau with L/R/M commands")]
struct Cli {
    /// Plateau size as `width,height` (e.g. 5,5)
    #[arg(long)]
    plateau: Option<String>,

    /// Starting position as `x,y,heading` (e.g. 1,2,N)
    #[arg(long)]
    position: Option<String>,

    /// Command sequence (e.g. LMLMLMLMM)
    #[arg(long)]
    commands: Option<String>,

    /// Distance covered by one M command
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Print the one-shot report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    if !(cli.step.is_finite() && cli.step >= 0.0) {
        bail!("--step must be a non-negative number, got {}", cli.step);
    }
    let mut rover = MarsRover::new(RoverConfig { step: cli.step });

    match (&cli.plateau, &cli.position, &cli.commands) {
        (Some(plateau), Some(position), Some(commands)) => {
            run_once(&mut rover, plateau, position, commands, cli.json)
        }
        (None, None, None) => {
            let stdin = io::stdin();
            let reports = run_interactive(&mut rover, &mut stdin.lock().lines())?;
            info!(missions = reports.len(), "interactive session ended");
            Ok(())
        }
        _ => bail!("--plateau, --position and --commands must be given together"),
    }
}

fn run_once(
    rover: &mut MarsRover,
    plateau: &str,
    position: &str,
    commands: &str,
    json: bool,
) -> Result<()> {
    let mission = Mission::parse(plateau, position, commands)?;
    info!(commands = mission.commands.len(), "running one-shot mission");
    let report = rover.run(&mission);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", display::mission_complete(&report));
    }
    Ok(())
}

/// Runs missions from `lines` until end of input and returns their reports in order.
fn run_interactive<L>(rover: &mut MarsRover, lines: &mut L) -> Result<Vec<MissionReport>>
where
    L: Iterator<Item = io::Result<String>>,
{
    let mut reports = Vec::new();
    loop {
        rover.reset();
        println!("{}", display::header());
        println!("{}", display::plateau_step());
        let Some(bounds) = ask(&mut *lines, display::PLATEAU_PROMPT, Mission::parse_bounds)? else {
            break;
        };
        rover.set_bounds(bounds.x, bounds.y);
        println!("{}", display::plateau_set(rover.bounds()));

        println!("{}", display::position_step());
        let Some((start, heading)) = ask(&mut *lines, display::POSITION_PROMPT, Mission::parse_start)?
        else {
            break;
        };
        rover.set_position(start.x, start.y, heading);
        println!("{}", display::rover_placed(rover.position(), rover.heading()));

        println!("{}", display::commands_step());
        let Some(commands) = ask(
            &mut *lines,
            display::COMMANDS_PROMPT,
            mars_rover::parse_command_sequence,
        )?
        else {
            break;
        };
        rover.execute_sequence(commands);

        let report = MissionReport::from(rover.state());
        info!(
            x = report.position.x,
            y = report.position.y,
            heading = %report.heading,
            "mission complete"
        );
        println!("{}", display::mission_complete(&report));
        reports.push(report);
    }

    println!();
    Ok(reports)
}

/// Prompts until `parse` accepts a line. Returns `None` on end of input.
///
/// A line that is not valid UTF-8 is rejected like any other bad input. Other
/// read failures end the session.
fn ask<L, T, F>(lines: &mut L, prompt: &str, parse: F) -> Result<Option<T>>
where
    L: Iterator<Item = io::Result<String>>,
    F: Fn(&str) -> ValidationResult<T>,
{
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let line = match lines.next() {
            None => return Ok(None),
            Some(Ok(line)) => line,
            Some(Err(err)) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(%err, "unreadable input line");
                println!("{}", display::error_block(&err));
                continue;
            }
            Some(Err(err)) => return Err(err.into()),
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                warn!(kind = ?err.kind(), "input rejected");
                println!("{}", display::error_block(&err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use mars_rover::Heading;

    fn input(lines: &[&str]) -> impl Iterator<Item = io::Result<String>> {
        lines
            .iter()
            .map(|l| Ok::<_, io::Error>(l.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_ask_reprompts_after_rejected_line() {
        let mut lines = input(&["5", "5,5"]);
        let bounds = ask(&mut lines, "", Mission::parse_bounds).unwrap();
        assert_eq!(bounds, Some(DVec2::new(5.0, 5.0)));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_ask_returns_none_at_end_of_input() {
        let mut lines = input(&[]);
        assert_eq!(ask(&mut lines, "", Mission::parse_bounds).unwrap(), None);

        let mut lines = input(&["x,y"]);
        assert_eq!(ask(&mut lines, "", Mission::parse_bounds).unwrap(), None);
    }

    #[test]
    fn test_ask_skips_lines_that_are_not_utf8() {
        let mut lines = vec![
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            )),
            Ok("1,2,N".to_string()),
        ]
        .into_iter();
        let start = ask(&mut lines, "", Mission::parse_start).unwrap();
        assert_eq!(start, Some((DVec2::new(1.0, 2.0), Heading::N)));
    }

    #[test]
    fn test_ask_stops_on_other_read_errors() {
        let mut lines = vec![
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
            Ok("5,5".to_string()),
        ]
        .into_iter();
        assert!(ask(&mut lines, "", Mission::parse_bounds).is_err());
    }

    #[test]
    fn test_interactive_session_resets_between_missions() {
        let mut rover = MarsRover::default();
        let mut lines = input(&["5,5", "1,2,N", "LMLMLMLMM", "3,3", "abc", "3,3,E", "MMMM"]);
        let reports = run_interactive(&mut rover, &mut lines).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].position, DVec2::new(1.0, 3.0));
        assert_eq!(reports[0].heading, Heading::N);
        assert_eq!(reports[1].bounds, DVec2::new(3.0, 3.0));
        assert_eq!(reports[1].position, DVec2::new(3.0, 3.0));
        assert_eq!(reports[1].heading, Heading::E);
    }

    #[test]
    fn test_interactive_session_survives_bad_utf8() {
        let mut rover = MarsRover::default();
        let mut lines = vec![
            Ok("5,5".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")),
            Ok("1,2,N".to_string()),
            Ok("M".to_string()),
        ]
        .into_iter();
        let reports = run_interactive(&mut rover, &mut lines).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].position, DVec2::new(1.0, 3.0));
    }
}
