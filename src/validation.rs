//! Conversion of untrusted console text into typed rover values.
//!
//! All functions here are pure; none of them touch rover state.

use crate::error::{ValidationError, ValidationResult};
use crate::interpreter::Command;
use crate::rover::Heading;

/// Parses a non-negative number for the field called `field`.
///
/// Surrounding whitespace is ignored and fractional values are accepted.
/// `NaN` and infinities are rejected as not-a-number.
pub fn parse_number(raw: &str, field: &str) -> ValidationResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput {
            field: field.to_string(),
        });
    }

    let value = match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            return Err(ValidationError::NotANumber {
                field: field.to_string(),
                input: trimmed.to_string(),
            });
        }
    };

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Parses a heading letter, ignoring case and surrounding whitespace.
pub fn parse_direction(raw: &str) -> ValidationResult<Heading> {
    let clean = raw.trim().to_uppercase();
    match clean.as_str() {
        "" => Err(ValidationError::EmptyInput {
            field: "Direction".to_string(),
        }),
        "N" => Ok(Heading::N),
        "E" => Ok(Heading::E),
        "S" => Ok(Heading::S),
        "W" => Ok(Heading::W),
        _ => Err(ValidationError::InvalidDirection { input: clean }),
    }
}

/// Parses exactly one command tag. Case-sensitive, no trimming.
pub fn parse_command(raw: &str) -> ValidationResult<Command> {
    match raw {
        "L" => Ok(Command::Left),
        "R" => Ok(Command::Right),
        "M" => Ok(Command::Move),
        _ => Err(ValidationError::InvalidCommand {
            input: raw.to_string(),
        }),
    }
}

fn split_fields<const N: usize>(raw: &str) -> ValidationResult<[&str; N]> {
    let parts: Vec<&str> = raw.split(',').collect();
    let found = parts.len();
    parts
        .try_into()
        .map_err(|_| ValidationError::BadFieldCount {
            input: raw.to_string(),
            expected: N,
            found,
        })
}

/// Splits `width,height`. Parts are returned untrimmed.
pub fn parse_plateau_fields(raw: &str) -> ValidationResult<(&str, &str)> {
    let [w, h] = split_fields::<2>(raw)?;
    Ok((w, h))
}

/// Splits `x,y,heading`. Parts are returned untrimmed.
pub fn parse_position_fields(raw: &str) -> ValidationResult<(&str, &str, &str)> {
    let [x, y, h] = split_fields::<3>(raw)?;
    Ok((x, y, h))
}

/// Parses a whole command string such as `LMLMLMLMM`.
///
/// The string is trimmed once; every remaining character must be a valid
/// command. Nothing is returned unless all of them are.
pub fn parse_command_sequence(raw: &str) -> ValidationResult<Vec<Command>> {
    let clean = raw.trim();
    if clean.is_empty() {
        return Err(ValidationError::EmptyInput {
            field: "Command sequence".to_string(),
        });
    }

    let mut buf = [0u8; 4];
    clean
        .chars()
        .enumerate()
        .map(|(index, symbol)| {
            parse_command(symbol.encode_utf8(&mut buf)).map_err(|_| {
                ValidationError::InvalidCommandInSequence {
                    input: clean.to_string(),
                    index,
                    symbol,
                }
            })
        })
        .collect()
}
