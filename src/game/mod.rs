//! The playable screen: maze, player and ghosts, advanced by a fixed-interval loop.

use std::time::Instant;

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::Schedule;
use bevy_ecs::world::World;
use glam::IVec2;
use sdl2::pixels::Color;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::asset::Asset;
use crate::config::{ActorTuning, GameConfig};
use crate::entity::direction::Direction;
use crate::entity::mover::Mover;
use crate::entity::sprite::{Sprite, Style};
use crate::entity::Actor;
use crate::error::{GameResult, RenderError};
use crate::events::{GameCommand, GameEvent};
use crate::formatter;
use crate::map::builder::spawn_decorations;
use crate::map::{CellKind, Maze};
use crate::render::Surface;
use crate::systems::components::{
    Background, DeltaTime, Decoration, DrawOrder, DrawSequence, Ghost, Layer, LoopState, PillCounter, PlayerControlled,
};
use crate::systems::game_schedule;
use crate::texture::animated::Animation;
use crate::texture::directional::DirectionalImages;
use crate::texture::Image;

/// Fill colour behind the maze image.
const BACKGROUND_FILL: Color = Color::RGB(0x22, 0x22, 0x22);
const GAME_OVER_TEXT: &str = "Game Over";

/// Measures wall-clock time between updates, in whole milliseconds.
#[derive(Debug)]
struct FrameClock {
    last: Instant,
}

impl FrameClock {
    fn new() -> Self {
        Self { last: Instant::now() }
    }

    fn reset(&mut self) {
        self.last = Instant::now();
    }

    fn tick(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
    }
}

/// The game screen.
///
/// Owns an ECS world holding the maze decorations and actors, and runs the game
/// schedule over it on every update. Anything the surrounding application has to
/// act on (screen changes, the delayed exit) comes out of [`GameScreen::take_events`].
pub struct GameScreen {
    world: World,
    schedule: Schedule,
    clock: FrameClock,
    player: Entity,
    actors: SmallVec<[(Entity, ActorTuning); 5]>,
    pending: Vec<GameEvent>,
}

impl GameScreen {
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let mut world = World::new();
        EventRegistry::register_event::<GameEvent>(&mut world);
        world.init_resource::<DrawSequence>();
        world.init_resource::<DeltaTime>();
        world.insert_resource(LoopState {
            paused: config.start_paused,
            game_over: false,
        });
        world.insert_resource(PillCounter(config.pill_target));
        world.insert_resource(load_maze(&config)?);

        let order = DrawOrder::next(&mut world, Layer::Background);
        world.spawn((
            Sprite::with_image(0, 0, Asset::Maze.image()).styled(Style::filled(BACKGROUND_FILL)),
            order,
            Background,
        ));
        spawn_decorations(&mut world);

        let tuning = config.player;
        let player = Actor::four_way(tuning.start, player_images()?, tuning.mover(), tuning.frame_delay, tuning.limits)?
            .with_style(Style::border(Color::GREEN, 2))
            .spawn(&mut world)
            .insert(PlayerControlled)
            .id();

        let mut actors: SmallVec<[(Entity, ActorTuning); 5]> = SmallVec::new();
        actors.push((player, tuning));
        for (ghost, tuning) in config.ghosts {
            let entity = Actor::monster(tuning.start, &[ghost.asset().image()], tuning.mover(), tuning.frame_delay, tuning.limits)?
                .with_style(Style::border(ghost.border_color(), 2))
                .spawn(&mut world)
                .insert(ghost)
                .id();
            actors.push((entity, tuning));
        }

        info!(
            pills = config.pill_target,
            ghosts = actors.len() - 1,
            paused = config.start_paused,
            "Game screen ready"
        );
        world.insert_resource(config);

        Ok(Self {
            world,
            schedule: game_schedule(),
            clock: FrameClock::new(),
            player,
            actors,
            pending: Vec::new(),
        })
    }

    /// Resumes the loop. The first update after this measures time from now.
    pub fn start(&mut self) {
        let mut state = self.world.resource_mut::<LoopState>();
        if state.paused {
            state.paused = false;
            self.clock.reset();
            debug!("Game loop started");
        }
    }

    pub fn stop(&mut self) {
        let mut state = self.world.resource_mut::<LoopState>();
        if !state.paused {
            state.paused = true;
            debug!("Game loop stopped");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.world.resource::<LoopState>().paused
    }

    pub fn is_game_over(&self) -> bool {
        self.world.resource::<LoopState>().game_over
    }

    /// One loop tick: update then draw, unless paused. Returns whether the loop
    /// should keep ticking.
    pub fn animate(&mut self, surface: &mut dyn Surface) -> Result<bool, RenderError> {
        if self.is_paused() {
            return Ok(false);
        }
        self.update();
        self.draw(surface)?;
        Ok(!self.is_paused())
    }

    /// Advances the game by the wall-clock time since the previous update.
    pub fn update(&mut self) {
        let delta = self.clock.tick();
        self.advance(delta);
    }

    /// Advances the game by exactly `delta` milliseconds.
    pub fn advance(&mut self, delta: u32) {
        self.world.insert_resource(DeltaTime(delta));
        self.schedule.run(&mut self.world);
        formatter::increment_tick();

        let mut events = self.world.resource_mut::<Events<GameEvent>>();
        self.pending.extend(events.drain());
    }

    /// Events raised by updates since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Clears the surface and draws everything back to front: background, maze,
    /// then actors in the order they were added.
    pub fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        surface.clear()?;

        let mut query = self.world.query::<(&DrawOrder, &Sprite)>();
        let mut drawables: Vec<(DrawOrder, &Sprite)> = query.iter(&self.world).map(|(order, sprite)| (*order, sprite)).collect();
        drawables.sort_by_key(|(order, _)| *order);
        for (_, sprite) in drawables {
            sprite.draw(surface)?;
        }

        if self.pills_remaining() <= 0 {
            let center = (self.world.resource::<GameConfig>().canvas_size / 2).as_ivec2();
            surface.draw_text(GAME_OVER_TEXT, center, Color::RED)?;
        }
        Ok(())
    }

    /// Points the player in `direction` and switches to the matching images straight
    /// away.
    pub fn steer(&mut self, direction: Direction) {
        let Ok(mut player) = self.world.get_entity_mut(self.player) else {
            return;
        };
        if let Some(mut mover) = player.get_mut::<Mover>() {
            mover.direction = direction;
        }

        let images: Option<SmallVec<[Image; 4]>> = player
            .get::<DirectionalImages>()
            .and_then(|images| images.get(direction))
            .map(SmallVec::from_slice);
        if let (Some(images), Some(mut animation)) = (images, player.get_mut::<Animation>()) {
            if let Err(error) = animation.set_images(&images) {
                warn!(?error, ?direction, "Could not switch player images");
            }
        }
    }

    pub fn handle_command(&mut self, command: GameCommand) -> GameResult<()> {
        match command {
            GameCommand::MovePlayer(direction) => self.steer(direction),
            GameCommand::TogglePause => {
                if self.is_paused() {
                    self.start();
                } else {
                    self.stop();
                }
            }
            GameCommand::ResetLevel => self.reset()?,
            GameCommand::Exit => {}
        }
        Ok(())
    }

    /// Puts the game back to its initial state: fresh maze and pills, actors at their
    /// start positions, counter at its target. The paused state is left alone.
    pub fn reset(&mut self) -> GameResult<()> {
        let config = self.world.resource::<GameConfig>().clone();

        let decorations: Vec<Entity> = self
            .world
            .query_filtered::<Entity, With<Decoration>>()
            .iter(&self.world)
            .collect();
        for entity in decorations {
            self.world.despawn(entity);
        }
        self.world.insert_resource(load_maze(&config)?);
        spawn_decorations(&mut self.world);

        for &(entity, tuning) in &self.actors {
            let Ok(mut actor) = self.world.get_entity_mut(entity) else {
                continue;
            };
            if let Some(mut sprite) = actor.get_mut::<Sprite>() {
                sprite.set_position(tuning.start);
            }
            if let Some(mut mover) = actor.get_mut::<Mover>() {
                *mover = tuning.mover();
            }
        }

        self.world.insert_resource(PillCounter(config.pill_target));
        self.world.resource_mut::<LoopState>().game_over = false;
        self.world.resource_mut::<Events<GameEvent>>().clear();
        self.pending.clear();

        info!("Game reset");
        Ok(())
    }

    pub fn pills_remaining(&self) -> i32 {
        self.world.resource::<PillCounter>().0
    }

    pub fn maze(&self) -> &Maze {
        self.world.resource::<Maze>()
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    /// Ghost entities, in spawn order.
    pub fn ghosts(&self) -> impl Iterator<Item = (Entity, Ghost)> + '_ {
        self.actors
            .iter()
            .filter_map(|&(entity, _)| self.world.get::<Ghost>(entity).map(|ghost| (entity, *ghost)))
    }

    pub fn sprite(&self, entity: Entity) -> Option<&Sprite> {
        self.world.get::<Sprite>(entity)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

fn load_maze(config: &GameConfig) -> GameResult<Maze> {
    let maze = Maze::parse(config.board)?;
    let on_board = maze.count(CellKind::Pill);
    if on_board as i32 != config.pill_target {
        warn!(
            on_board,
            target = config.pill_target,
            "Pill target does not match the pills on the board"
        );
    }
    Ok(maze)
}

/// The player's mouth opens towards where it is heading.
fn player_images() -> GameResult<DirectionalImages> {
    let closed = Asset::PacmanClosed.image();
    let images = DirectionalImages::four_way(
        &[closed, Asset::PacmanLeft.image()],
        &[closed, Asset::PacmanRight.image()],
        &[closed, Asset::PacmanUp.image()],
        &[closed, Asset::PacmanDown.image()],
    )?;
    Ok(images)
}

/// Offset of the game canvas inside a window of `window` size, centred horizontally
/// and flush with the top.
pub fn canvas_offset(window: glam::UVec2, canvas: glam::UVec2) -> IVec2 {
    IVec2::new((window.x.saturating_sub(canvas.x) / 2) as i32, 0)
}
