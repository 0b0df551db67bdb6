use bevy_ecs::{component::Component, resource::Resource, world::World};
use glam::UVec2;
use sdl2::pixels::Color;
use strum_macros::{Display, EnumIter};

use crate::asset::Asset;

/// A tag component for entities that are controlled by the player.
#[derive(Default, Component, Debug, Clone, Copy)]
pub struct PlayerControlled;

/// A tag component for actors taking part in wall and contact collisions.
#[derive(Default, Component, Debug, Clone, Copy)]
pub struct Collider;

/// The four ghosts, by colour.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Ghost {
    Red,
    Green,
    Yellow,
    Pink,
}

impl Ghost {
    pub fn asset(self) -> Asset {
        match self {
            Ghost::Red => Asset::RedGhost,
            Ghost::Green => Asset::GreenGhost,
            Ghost::Yellow => Asset::YellowGhost,
            Ghost::Pink => Asset::PinkGhost,
        }
    }

    /// Colour of the debug border drawn around the ghost.
    pub fn border_color(self) -> Color {
        match self {
            Ghost::Red => Color::RED,
            Ghost::Green => Color::GREEN,
            Ghost::Yellow => Color::YELLOW,
            Ghost::Pink => Color::RGB(255, 192, 203),
        }
    }
}

/// A maze cell's sprite (wall, pill, blank or fruit). Rebuilt wholesale on reset.
#[derive(Default, Component, Debug, Clone, Copy)]
pub struct Decoration;

/// The maze background image.
#[derive(Default, Component, Debug, Clone, Copy)]
pub struct Background;

#[derive(Default, Component, Debug, Clone, Copy)]
pub struct Wall;

/// A pill, remembering the maze cell it sits in.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pill {
    pub cell: UVec2,
}

/// Broad drawing layers, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Maze,
    Actors,
}

/// Draw position of an entity: by layer, then in the order entities were added.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DrawOrder {
    pub layer: Layer,
    pub sequence: u32,
}

impl DrawOrder {
    /// Allocates the next slot on `layer`.
    pub fn next(world: &mut World, layer: Layer) -> Self {
        let sequence = world.get_resource_or_insert_with(DrawSequence::default).next();
        Self { layer, sequence }
    }
}

/// Counter handing out draw sequence numbers.
#[derive(Resource, Debug, Default)]
pub struct DrawSequence(u32);

impl DrawSequence {
    pub fn next(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }
}

/// Milliseconds elapsed since the previous update.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeltaTime(pub u32);

/// Pills left to eat before the game is won.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillCounter(pub i32);

/// Whether the game loop is running, and whether the game has ended.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoopState {
    pub paused: bool,
    pub game_over: bool,
}
