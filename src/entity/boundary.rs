//! Policies deciding what happens when an actor reaches the edge of its area.

use bevy_ecs::component::Component;

use crate::entity::direction::Direction;
use crate::entity::mover::Mover;
use crate::entity::sprite::Sprite;

/// Keeps a sprite inside a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clamp {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Default for Clamp {
    fn default() -> Self {
        Self::new(0, 800, 0, 600)
    }
}

impl Clamp {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Pulls the sprite back inside `left..right` horizontally.
    ///
    /// A sprite wider than the range ends up pinned to `left`.
    pub fn clamp_x(sprite: &mut Sprite, left: i32, right: i32) {
        if sprite.left() < left {
            sprite.set_left(left);
        } else if sprite.right() > right {
            sprite.set_left((right - sprite.width() as i32).max(left));
        }
    }

    /// Pulls the sprite back inside `top..bottom` vertically.
    ///
    /// A sprite taller than the range ends up pinned to `top`.
    pub fn clamp_y(sprite: &mut Sprite, top: i32, bottom: i32) {
        if sprite.top() < top {
            sprite.set_top(top);
        } else if sprite.bottom() > bottom {
            sprite.set_top((bottom - sprite.height() as i32).max(top));
        }
    }

    pub fn clamp_all(&self, sprite: &mut Sprite) {
        Self::clamp_x(sprite, self.left, self.right);
        Self::clamp_y(sprite, self.top, self.bottom);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// What an actor does at the edge of its area.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Stop at the edges.
    Clamp(Clamp),
    /// Turn around at `min`/`max` along one axis.
    Bounce { axis: Axis, min: i32, max: i32 },
    /// Leave through one side and come back through the other, once fully past it.
    Wrap { axis: Axis, min: i32, max: i32 },
}

impl Boundary {
    pub fn apply(&self, sprite: &mut Sprite, mover: Option<&mut Mover>) {
        match *self {
            Boundary::Clamp(clamp) => clamp.clamp_all(sprite),
            Boundary::Bounce { axis, min, max } => {
                if let Some(mover) = mover {
                    bounce(axis, min, max, sprite, mover);
                }
            }
            Boundary::Wrap { axis, min, max } => {
                if let Some(mover) = mover {
                    wrap(axis, min, max, sprite, mover.direction);
                }
            }
        }
    }
}

fn bounce(axis: Axis, min: i32, max: i32, sprite: &mut Sprite, mover: &mut Mover) {
    match (axis, mover.direction) {
        (Axis::Horizontal, Direction::Left) if sprite.left() < min => {
            sprite.set_left(min);
            mover.direction = Direction::Right;
        }
        (Axis::Horizontal, Direction::Right) if sprite.right() > max => {
            sprite.set_right(max);
            mover.direction = Direction::Left;
        }
        (Axis::Vertical, Direction::Up) if sprite.top() < min => {
            sprite.set_top(min);
            mover.direction = Direction::Down;
        }
        (Axis::Vertical, Direction::Down) if sprite.bottom() > max => {
            sprite.set_bottom(max);
            mover.direction = Direction::Up;
        }
        _ => {}
    }
}

fn wrap(axis: Axis, min: i32, max: i32, sprite: &mut Sprite, direction: Direction) {
    match (axis, direction) {
        (Axis::Horizontal, Direction::Left) if sprite.right() < min => sprite.set_left(max),
        (Axis::Horizontal, Direction::Right) if sprite.left() > max => sprite.set_right(min),
        (Axis::Vertical, Direction::Up) if sprite.bottom() < min => sprite.set_top(max),
        (Axis::Vertical, Direction::Down) if sprite.top() > max => sprite.set_bottom(min),
        _ => {}
    }
}
