use bevy_ecs::component::Component;
use smallvec::SmallVec;

use crate::entity::direction::Direction;
use crate::error::AnimationError;
use crate::texture::Image;

type ImageSet = SmallVec<[Image; 4]>;

/// Per-direction image sequences. The animation of an actor carrying this is
/// switched to the matching set whenever its direction changes.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionalImages {
    sets: [Option<ImageSet>; 4],
}

impl DirectionalImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the sequence used while travelling in `direction`.
    ///
    /// `Direction::Stopped` has no set of its own; the last set stays in use.
    pub fn with(mut self, direction: Direction, images: &[Image]) -> Result<Self, AnimationError> {
        if images.is_empty() {
            return Err(AnimationError::EmptySequence);
        }
        if let Some(index) = slot(direction) {
            self.sets[index] = Some(SmallVec::from_slice(images));
        }
        Ok(self)
    }

    pub fn horizontal(left: &[Image], right: &[Image]) -> Result<Self, AnimationError> {
        Self::new().with(Direction::Left, left)?.with(Direction::Right, right)
    }

    pub fn vertical(up: &[Image], down: &[Image]) -> Result<Self, AnimationError> {
        Self::new().with(Direction::Up, up)?.with(Direction::Down, down)
    }

    pub fn four_way(left: &[Image], right: &[Image], up: &[Image], down: &[Image]) -> Result<Self, AnimationError> {
        Self::horizontal(left, right)?.with(Direction::Up, up)?.with(Direction::Down, down)
    }

    pub fn get(&self, direction: Direction) -> Option<&[Image]> {
        slot(direction).and_then(|index| self.sets[index].as_deref())
    }

    /// The set shown before the actor has a direction of its own: the first
    /// registered set in right, down, left, up order.
    pub fn first(&self) -> Option<&[Image]> {
        self.sets.iter().flatten().next().map(|set| set.as_slice())
    }
}

fn slot(direction: Direction) -> Option<usize> {
    match direction {
        Direction::Right => Some(0),
        Direction::Down => Some(1),
        Direction::Left => Some(2),
        Direction::Up => Some(3),
        Direction::Stopped => None,
    }
}
