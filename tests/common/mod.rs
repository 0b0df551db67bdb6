#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::EventRegistry, world::World};
use glam::{IVec2, UVec2};
use pacman_arcade::{
    asset::Asset,
    config::GameConfig,
    entity::direction::Direction,
    entity::mover::Mover,
    entity::sprite::{Bounds, Sprite, Style},
    error::RenderError,
    events::GameEvent,
    render::Surface,
    systems::components::{Collider, DeltaTime, DrawOrder, Layer, LoopState, PillCounter, PlayerControlled, Wall},
    texture::Image,
};
use sdl2::pixels::Color;

/// Everything a surface was asked to draw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Rect(Bounds, Style),
    Image(Image, IVec2),
    Text(String, IVec2, Color),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn images(&self) -> Vec<(Image, IVec2)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Image(image, at) => Some((*image, *at)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(text, ..) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn position_of(&self, wanted: &DrawCall) -> Option<usize> {
        self.calls.iter().position(|call| call == wanted)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn draw_rect(&mut self, bounds: Bounds, style: &Style) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Rect(bounds, *style));
        Ok(())
    }

    fn draw_image(&mut self, image: Image, top_left: IVec2) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Image(image, top_left));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, center: IVec2, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Text(text.to_string(), center, color));
        Ok(())
    }
}

/// A surface that refuses to draw anything.
pub struct FailingSurface;

impl Surface for FailingSurface {
    fn clear(&mut self) -> Result<(), RenderError> {
        Err(RenderError::Failed("surface gone".into()))
    }

    fn draw_rect(&mut self, _: Bounds, _: &Style) -> Result<(), RenderError> {
        Err(RenderError::Failed("surface gone".into()))
    }

    fn draw_image(&mut self, _: Image, _: IVec2) -> Result<(), RenderError> {
        Err(RenderError::Failed("surface gone".into()))
    }

    fn draw_text(&mut self, _: &str, _: IVec2, _: Color) -> Result<(), RenderError> {
        Err(RenderError::Failed("surface gone".into()))
    }
}

/// A 12x12 test image.
pub fn image(asset: Asset) -> Image {
    Image::new(asset, UVec2::splat(12))
}

pub fn sized_image(asset: Asset, width: u32, height: u32) -> Image {
    Image::new(asset, UVec2::new(width, height))
}

/// A mover with the game's usual tuning: a 3px step every 25ms.
pub fn mover(direction: Direction) -> Mover {
    Mover::new(direction, 25, 3)
}

/// A world with the resources the game systems expect.
pub fn create_test_world() -> World {
    let mut world = World::new();
    EventRegistry::register_event::<GameEvent>(&mut world);
    world.insert_resource(DeltaTime(0));
    world.insert_resource(GameConfig::default());
    world.insert_resource(LoopState::default());
    world.insert_resource(PillCounter(1));
    world
}

pub fn spawn_wall(world: &mut World, x: i32, y: i32) -> Entity {
    let order = DrawOrder::next(world, Layer::Maze);
    world.spawn((Sprite::new(x, y, 16, 16), order, Wall)).id()
}

pub fn spawn_player(world: &mut World, x: i32, y: i32) -> Entity {
    let order = DrawOrder::next(world, Layer::Actors);
    world
        .spawn((Sprite::new(x, y, 12, 12), mover(Direction::Stopped), order, Collider, PlayerControlled))
        .id()
}

pub fn drain_events(world: &mut World) -> Vec<GameEvent> {
    world.resource_mut::<bevy_ecs::event::Events<GameEvent>>().drain().collect()
}

/// Configuration for a game screen that runs from the start.
pub fn running_config() -> GameConfig {
    GameConfig {
        start_paused: false,
        ..GameConfig::default()
    }
}
