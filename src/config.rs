//! Tunable parameters of the game screen.

use std::time::Duration;

use bevy_ecs::resource::Resource;
use glam::{IVec2, UVec2};

use crate::constants::{CANVAS_SIZE, EXIT_DELAY, LOOP_TIME, PILL_TARGET, RAW_BOARD, WINDOW_SIZE};
use crate::entity::boundary::Clamp;
use crate::entity::direction::Direction;
use crate::entity::mover::Mover;
use crate::systems::components::Ghost;

/// Movement and animation parameters of one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorTuning {
    pub start: IVec2,
    pub direction: Direction,
    /// Milliseconds between steps.
    pub delay: u32,
    /// Pixels per step.
    pub speed: i32,
    /// Milliseconds between animation frames.
    pub frame_delay: u32,
    pub limits: Clamp,
}

impl ActorTuning {
    pub fn mover(&self) -> Mover {
        Mover::new(self.direction, self.delay, self.speed)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub loop_time: Duration,
    pub canvas_size: UVec2,
    /// Maze layout, one string per row.
    pub board: &'static [&'static str],
    /// Pills to eat before the game is won.
    pub pill_target: i32,
    pub exit_delay: Duration,
    /// Whether the loop waits for `start()` after construction.
    pub start_paused: bool,
    pub player: ActorTuning,
    pub ghosts: [(Ghost, ActorTuning); 4],
}

impl GameConfig {
    pub fn ghost(&self, ghost: Ghost) -> Option<&ActorTuning> {
        self.ghosts.iter().find(|(kind, _)| *kind == ghost).map(|(_, tuning)| tuning)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let ghost = |x: i32, y: i32| ActorTuning {
            start: IVec2::new(x, y),
            direction: Direction::Up,
            delay: 25,
            speed: 3,
            frame_delay: 100,
            limits: Clamp::new(0, WINDOW_SIZE.x as i32, 0, WINDOW_SIZE.y as i32),
        };

        Self {
            loop_time: LOOP_TIME,
            canvas_size: CANVAS_SIZE,
            board: &RAW_BOARD,
            pill_target: PILL_TARGET,
            exit_delay: EXIT_DELAY,
            start_paused: false,
            player: ActorTuning {
                start: IVec2::new(22, 22),
                direction: Direction::Stopped,
                delay: 25,
                speed: 3,
                frame_delay: 100,
                limits: Clamp::new(0, CANVAS_SIZE.x as i32, 0, CANVAS_SIZE.y as i32),
            },
            ghosts: [
                (Ghost::Red, ghost(222, 220)),
                (Ghost::Green, ghost(222, 240)),
                (Ghost::Yellow, ghost(222, 220)),
                (Ghost::Pink, ghost(222, 240)),
            ],
        }
    }
}
