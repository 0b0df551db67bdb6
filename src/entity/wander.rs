use bevy_ecs::component::Component;
use rand::Rng;

use crate::entity::direction::Direction;
use crate::entity::mover::Mover;

/// Marks an actor that picks a new random direction whenever it bumps into a wall.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Wander;

impl Wander {
    /// Maps a roll of 1..=4 onto left, right, up and down.
    ///
    /// A roll for the direction opposite the current one is ignored and the
    /// current direction is kept. Rolls above 4 count as 4.
    pub fn redirect(current: Direction, roll: u8) -> Direction {
        let (wanted, blocked_by) = match roll {
            1 => (Direction::Left, Direction::Right),
            2 => (Direction::Right, Direction::Left),
            3 => (Direction::Up, Direction::Down),
            _ => (Direction::Down, Direction::Up),
        };

        if current == blocked_by {
            current
        } else {
            wanted
        }
    }

    /// Rolls a new direction for `mover` and applies it.
    pub fn random_direction<R: Rng>(&self, mover: &mut Mover, rng: &mut R) -> Direction {
        let roll = rng.random_range(1..=4u8);
        mover.direction = Self::redirect(mover.direction, roll);
        mover.direction
    }
}
