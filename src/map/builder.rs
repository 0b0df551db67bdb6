//! Spawning the sprites that decorate each maze cell.

use bevy_ecs::world::{Mut, World};
use glam::{IVec2, UVec2};
use sdl2::pixels::Color;
use tracing::debug;

use crate::constants::{CELL_SIZE, PILL_INSET, PILL_SIZE};
use crate::entity::sprite::{Sprite, Style};
use crate::map::{cell_origin, CellKind, Maze};
use crate::systems::components::{Decoration, DrawOrder, Layer, Pill, Wall};

/// The sprite drawn for a cell of `kind` at grid position `cell`.
pub fn decoration_sprite(kind: CellKind, cell: UVec2) -> Sprite {
    let origin = cell_origin(cell);
    match kind {
        CellKind::Pill => {
            let at = origin + IVec2::splat(PILL_INSET);
            Sprite::new(at.x, at.y, PILL_SIZE, PILL_SIZE).styled(Style::border(Color::BLACK, 1).with_fill(Color::WHITE))
        }
        CellKind::Wall | CellKind::Blank => {
            Sprite::new(origin.x, origin.y, CELL_SIZE, CELL_SIZE).styled(Style::border(Color::RED, 0))
        }
        CellKind::Fruit => Sprite::new(origin.x, origin.y, CELL_SIZE, CELL_SIZE).styled(Style::border(Color::RED, 1)),
    }
}

/// Spawns one decoration per maze cell on the maze layer and records each entity
/// in its cell. Returns the number of sprites spawned.
pub fn spawn_decorations(world: &mut World) -> usize {
    world.resource_scope(|world, mut maze: Mut<Maze>| {
        let cells: Vec<(UVec2, CellKind)> = maze.cells().map(|(position, cell)| (position, cell.kind)).collect();

        for &(position, kind) in &cells {
            let order = DrawOrder::next(world, Layer::Maze);
            let mut entity = world.spawn((decoration_sprite(kind, position), order, Decoration));
            match kind {
                CellKind::Wall => {
                    entity.insert(Wall);
                }
                CellKind::Pill => {
                    entity.insert(Pill { cell: position });
                }
                CellKind::Blank | CellKind::Fruit => {}
            }
            let id = entity.id();
            maze.set_decoration(position, Some(id));
        }

        debug!(
            cells = cells.len(),
            walls = maze.count(CellKind::Wall),
            pills = maze.count(CellKind::Pill),
            "Maze decorations spawned"
        );
        cells.len()
    })
}
