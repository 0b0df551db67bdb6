//! The maze grid: what every cell holds and which sprite decorates it.

use bevy_ecs::{entity::Entity, resource::Resource};
use glam::{IVec2, UVec2};

use crate::constants::{BOARD_ORIGIN, CELL_SIZE};
use crate::error::ParseError;

pub mod builder;
pub mod parser;

/// The contents of a maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Pill,
    Blank,
    /// A cell the layout leaves unlabelled, drawn with a debug border.
    Fruit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// The sprite entity drawn for this cell, once spawned.
    pub decoration: Option<Entity>,
}

/// Index-addressed maze grid, stored row by row.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: UVec2,
    cells: Vec<Cell>,
}

impl Maze {
    /// Parses a layout of equally long rows. See [`parser::MazeParser`].
    pub fn parse(rows: &[&str]) -> Result<Self, ParseError> {
        let (size, kinds) = parser::MazeParser::parse_board(rows)?;
        let cells = kinds.into_iter().map(|kind| Cell { kind, decoration: None }).collect();
        Ok(Self { size, cells })
    }

    /// Grid size in cells (columns, rows).
    pub fn size(&self) -> UVec2 {
        self.size
    }

    fn index(&self, cell: UVec2) -> Option<usize> {
        (cell.x < self.size.x && cell.y < self.size.y).then(|| (cell.y * self.size.x + cell.x) as usize)
    }

    pub fn get(&self, cell: UVec2) -> Option<&Cell> {
        self.index(cell).map(|index| &self.cells[index])
    }

    pub fn kind(&self, cell: UVec2) -> Option<CellKind> {
        self.get(cell).map(|cell| cell.kind)
    }

    pub fn set_decoration(&mut self, cell: UVec2, decoration: Option<Entity>) {
        if let Some(index) = self.index(cell) {
            self.cells[index].decoration = decoration;
        }
    }

    /// Turns a pill cell blank and forgets its decoration. Returns whether the cell
    /// held a pill.
    pub fn clear_pill(&mut self, cell: UVec2) -> bool {
        let Some(index) = self.index(cell) else {
            return false;
        };
        let slot = &mut self.cells[index];
        if slot.kind != CellKind::Pill {
            return false;
        }
        *slot = Cell {
            kind: CellKind::Blank,
            decoration: None,
        };
        true
    }

    /// Every cell with its grid position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (UVec2, &Cell)> + '_ {
        let width = self.size.x;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (UVec2::new(index as u32 % width, index as u32 / width), cell))
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind == kind).count()
    }
}

/// Pixel position of a cell's top-left corner.
pub fn cell_origin(cell: UVec2) -> IVec2 {
    BOARD_ORIGIN + (cell * CELL_SIZE).as_ivec2()
}
