use bevy_ecs::component::Component;
use glam::IVec2;

use crate::entity::direction::Direction;
use crate::entity::sprite::Sprite;

/// Moves a sprite one step of `speed` pixels every time `delay` milliseconds have
/// accumulated.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mover {
    pub direction: Direction,
    delay: u32,
    speed: u32,
    elapsed: u32,
}

impl Mover {
    /// Negative speeds are stored as their magnitude.
    pub fn new(direction: Direction, delay: u32, speed: i32) -> Self {
        Self {
            direction,
            delay,
            speed: speed.unsigned_abs(),
            elapsed: 0,
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed.unsigned_abs();
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: u32) {
        self.delay = delay;
    }

    /// Milliseconds accumulated since the last step.
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// The offset one step applies in the current direction.
    pub fn step(&self) -> IVec2 {
        self.direction.as_ivec2() * self.speed as i32
    }

    /// Accumulates `delta` milliseconds and steps the sprite once the delay is
    /// reached. Returns whether a step was taken.
    ///
    /// Only one step is taken per call no matter how much time accumulated, and
    /// the accumulator restarts from zero afterwards.
    pub fn update(&mut self, delta: u32, sprite: &mut Sprite) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed < self.delay {
            return false;
        }

        sprite.translate(self.step());
        self.elapsed = 0;
        true
    }

    /// Undoes exactly one step in the current direction.
    pub fn backup(&self, sprite: &mut Sprite) {
        sprite.translate(-self.step());
    }
}
