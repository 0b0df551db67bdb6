//! Resolution of everything that can touch: walls, pills, ghosts, and the end of
//! the game.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Commands, Query, Res, ResMut};
use tracing::{info, trace};

use crate::config::GameConfig;
use crate::entity::mover::Mover;
use crate::entity::sprite::Sprite;
use crate::entity::wander::Wander;
use crate::events::{GameEvent, Outcome};
use crate::map::Maze;
use crate::screen::Screen;
use crate::systems::components::{Collider, LoopState, Pill, PillCounter, PlayerControlled, Wall};

/// Stops the loop and asks for the game-over screen and a delayed exit.
///
/// Only the first call after a (re)start has any effect.
pub fn end_game(outcome: Outcome, config: &GameConfig, state: &mut LoopState, events: &mut EventWriter<GameEvent>) {
    if state.game_over {
        return;
    }
    state.paused = true;
    state.game_over = true;

    info!(%outcome, exit_in = ?config.exit_delay, "Game finished");
    events.write(GameEvent::Finished(outcome));
    events.write(GameEvent::ShowScreen(Screen::GameOver));
    events.write(GameEvent::ExitAfter(config.exit_delay));
}

/// Ends the game once every pill has been eaten.
pub fn win_check_system(
    counter: Res<PillCounter>,
    config: Res<GameConfig>,
    mut state: ResMut<LoopState>,
    mut events: EventWriter<GameEvent>,
) {
    if counter.0 == 0 {
        end_game(Outcome::Won, &config, &mut state, &mut events);
    }
}

/// Pushes actors back out of walls. Wandering actors also pick a new direction.
///
/// An actor overlapping several walls backs up once per wall.
pub fn wall_collision_system(
    walls: Query<&Sprite, With<Wall>>,
    mut actors: Query<(Entity, &mut Sprite, &mut Mover, Option<&Wander>), (With<Collider>, Without<Wall>)>,
) {
    let mut rng = rand::rng();
    for wall in walls.iter() {
        let wall_bounds = wall.bounds();
        for (entity, mut sprite, mut mover, wander) in actors.iter_mut() {
            if !sprite.intersects(&wall_bounds) {
                continue;
            }

            mover.backup(&mut sprite);
            trace!(?entity, position = ?sprite.position(), "Backed out of wall");

            if let Some(wander) = wander {
                let direction = wander.random_direction(&mut mover, &mut rng);
                trace!(?entity, ?direction, "Wanderer redirected");
            }
        }
    }
}

/// Eats every pill the player is touching.
pub fn pill_pickup_system(
    mut commands: Commands,
    mut maze: ResMut<Maze>,
    mut counter: ResMut<PillCounter>,
    player: Query<&Sprite, With<PlayerControlled>>,
    pills: Query<(Entity, &Sprite, &Pill)>,
) {
    let Ok(player) = player.single() else {
        return;
    };
    let player_bounds = player.bounds();

    for (entity, sprite, pill) in pills.iter() {
        if !sprite.intersects(&player_bounds) {
            continue;
        }

        maze.clear_pill(pill.cell);
        commands.entity(entity).despawn();
        counter.0 -= 1;
        trace!(cell = ?pill.cell, remaining = counter.0, "Pill eaten");
    }
}

/// Ends the game when any other actor touches the player.
pub fn ghost_contact_system(
    config: Res<GameConfig>,
    mut state: ResMut<LoopState>,
    player: Query<&Sprite, With<PlayerControlled>>,
    others: Query<(Entity, &Sprite), (With<Collider>, Without<PlayerControlled>)>,
    mut events: EventWriter<GameEvent>,
) {
    let Ok(player) = player.single() else {
        return;
    };
    let player_bounds = player.bounds();

    if let Some((entity, _)) = others.iter().find(|(_, sprite)| sprite.intersects(&player_bounds)) {
        trace!(?entity, "Player caught");
        end_game(Outcome::Lost, &config, &mut state, &mut events);
    }
}
