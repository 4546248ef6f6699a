use std::str::FromStr;

use minehunt_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Empty command, try `r <row> <col>`, `f <row> <col>` or `q`")]
    Empty,
    #[error("Unknown command `{0}`")]
    Unknown(String),
    #[error("Expected a row and a column")]
    MissingCoords,
    #[error("Invalid coordinate `{0}`")]
    InvalidCoord(String),
    #[error("Unexpected input after the coordinates")]
    TrailingInput,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(CommandError::Empty);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "q" | "quit" => Self::Quit,
            "r" | "reveal" => Self::Reveal(parse_coords(&mut parts)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut parts)?),
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };

        if parts.next().is_some() {
            return Err(CommandError::TrailingInput);
        }
        Ok(command)
    }
}

fn parse_coords<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, CommandError> {
    let row = parse_coord(parts)?;
    let col = parse_coord(parts)?;
    Ok((row, col))
}

fn parse_coord<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Coord, CommandError> {
    let part = parts.next().ok_or(CommandError::MissingCoords)?;
    part.parse()
        .map_err(|_| CommandError::InvalidCoord(part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_verbs() {
        assert_eq!("r 1 2".parse::<Command>(), Ok(Command::Reveal((1, 2))));
        assert_eq!("  reveal 0 9 ".parse::<Command>(), Ok(Command::Reveal((0, 9))));
        assert_eq!("F 3 4".parse::<Command>(), Ok(Command::Flag((3, 4))));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "dig 1 1".parse::<Command>(),
            Err(CommandError::Unknown("dig".to_string()))
        );
        assert_eq!("r 1".parse::<Command>(), Err(CommandError::MissingCoords));
        assert_eq!(
            "f 1 -2".parse::<Command>(),
            Err(CommandError::InvalidCoord("-2".to_string()))
        );
        assert_eq!("r 1 2 3".parse::<Command>(), Err(CommandError::TrailingInput));
        assert_eq!("q now".parse::<Command>(), Err(CommandError::TrailingInput));
    }
}
