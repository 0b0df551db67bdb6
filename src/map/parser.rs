//! Map parsing functionality for converting raw board layouts into cell kinds.

use glam::UVec2;

use crate::error::ParseError;
use crate::map::CellKind;

/// Parser for converting raw board layouts into maze cells.
pub struct MazeParser;

impl MazeParser {
    /// Parses a single layout character.
    pub fn parse_character(c: char) -> Result<CellKind, ParseError> {
        match c {
            '#' => Ok(CellKind::Wall),
            '.' => Ok(CellKind::Pill),
            ' ' => Ok(CellKind::Blank),
            'F' => Ok(CellKind::Fruit),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a layout into its size (columns, rows) and cell kinds, row by row.
    ///
    /// # Errors
    ///
    /// Returns an error on an unknown character, or when a row's length differs
    /// from the first row's.
    pub fn parse_board(rows: &[&str]) -> Result<(UVec2, Vec<CellKind>), ParseError> {
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        let mut kinds = Vec::with_capacity(width * rows.len());

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::InvalidDimensions {
                    row,
                    found,
                    expected: width,
                });
            }
            for character in line.chars() {
                kinds.push(Self::parse_character(character)?);
            }
        }

        Ok((UVec2::new(width as u32, rows.len() as u32), kinds))
    }
}
