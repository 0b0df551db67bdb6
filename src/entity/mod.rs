//! Actors: sprites assembled from movement, animation, boundary and wander
//! capabilities.

use bevy_ecs::world::{EntityWorldMut, World};
use glam::IVec2;

use crate::entity::boundary::{Axis, Boundary, Clamp};
use crate::entity::mover::Mover;
use crate::entity::sprite::{Sprite, Style};
use crate::entity::wander::Wander;
use crate::error::AnimationError;
use crate::systems::components::{Collider, DrawOrder, Layer};
use crate::texture::animated::Animation;
use crate::texture::directional::DirectionalImages;
use crate::texture::Image;

pub mod boundary;
pub mod direction;
pub mod mover;
pub mod sprite;
pub mod wander;

/// A sprite plus whichever capabilities it needs, ready to be spawned.
///
/// The constructors below cover the usual combinations; anything else can be put
/// together with the `with_*` methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub sprite: Sprite,
    pub mover: Option<Mover>,
    pub animation: Option<Animation>,
    pub images: Option<DirectionalImages>,
    pub boundary: Option<Boundary>,
    pub wander: bool,
}

impl Actor {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            mover: None,
            animation: None,
            images: None,
            boundary: None,
            wander: false,
        }
    }

    pub fn with_mover(mut self, mover: Mover) -> Self {
        self.mover = Some(mover);
        self
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.sprite.style = style;
        self
    }

    pub fn wandering(mut self) -> Self {
        self.wander = true;
        self
    }

    /// Animates through `images`, starting on the first one.
    pub fn with_animation(mut self, images: &[Image], frame_delay: u32, looping: bool) -> Result<Self, AnimationError> {
        let animation = Animation::new(images.iter().copied(), frame_delay, looping)?;
        self.sprite.set_image(animation.current_image());
        self.animation = Some(animation);
        Ok(self)
    }

    /// Animates through per-direction image sets, starting on the set for the
    /// mover's direction (or the first registered set when stopped).
    pub fn with_directional_images(mut self, images: DirectionalImages, frame_delay: u32) -> Result<Self, AnimationError> {
        let direction = self.mover.map(|mover| mover.direction).unwrap_or_default();
        let initial = images
            .get(direction)
            .or_else(|| images.first())
            .ok_or(AnimationError::EmptySequence)?;
        self = self.with_animation(initial, frame_delay, true)?;
        self.images = Some(images);
        Ok(self)
    }

    /// A plain sprite that moves and stays inside `limits`.
    pub fn moving_sprite(sprite: Sprite, mover: Mover, limits: Clamp) -> Self {
        Self::new(sprite).with_mover(mover).with_boundary(Boundary::Clamp(limits))
    }

    /// A stationary animated sprite.
    pub fn animated_sprite(position: IVec2, images: &[Image], frame_delay: u32, looping: bool) -> Result<Self, AnimationError> {
        Self::new(sprite_at(position, images)?).with_animation(images, frame_delay, looping)
    }

    /// A looping animated sprite that moves and stays inside `limits`.
    pub fn animated_moving_sprite(
        position: IVec2,
        images: &[Image],
        mover: Mover,
        frame_delay: u32,
        limits: Clamp,
    ) -> Result<Self, AnimationError> {
        Ok(Self::animated_sprite(position, images, frame_delay, true)?
            .with_mover(mover)
            .with_boundary(Boundary::Clamp(limits)))
    }

    /// Walks left and right between `min` and `max`, turning around at each end.
    pub fn horizontal_bouncer(
        position: IVec2,
        left: &[Image],
        right: &[Image],
        mover: Mover,
        frame_delay: u32,
        (min, max): (i32, i32),
    ) -> Result<Self, AnimationError> {
        Self::directional(position, DirectionalImages::horizontal(left, right)?, mover, frame_delay)
            .map(|actor| actor.with_boundary(Boundary::Bounce { axis: Axis::Horizontal, min, max }))
    }

    /// Walks up and down between `min` and `max`, turning around at each end.
    pub fn vertical_bouncer(
        position: IVec2,
        up: &[Image],
        down: &[Image],
        mover: Mover,
        frame_delay: u32,
        (min, max): (i32, i32),
    ) -> Result<Self, AnimationError> {
        Self::directional(position, DirectionalImages::vertical(up, down)?, mover, frame_delay)
            .map(|actor| actor.with_boundary(Boundary::Bounce { axis: Axis::Vertical, min, max }))
    }

    /// Walks left or right, reappearing on the opposite side once fully past an edge.
    pub fn horizontal_repeater(
        position: IVec2,
        left: &[Image],
        right: &[Image],
        mover: Mover,
        frame_delay: u32,
        (min, max): (i32, i32),
    ) -> Result<Self, AnimationError> {
        Self::directional(position, DirectionalImages::horizontal(left, right)?, mover, frame_delay)
            .map(|actor| actor.with_boundary(Boundary::Wrap { axis: Axis::Horizontal, min, max }))
    }

    /// Walks up or down, reappearing on the opposite side once fully past an edge.
    pub fn vertical_repeater(
        position: IVec2,
        up: &[Image],
        down: &[Image],
        mover: Mover,
        frame_delay: u32,
        (min, max): (i32, i32),
    ) -> Result<Self, AnimationError> {
        Self::directional(position, DirectionalImages::vertical(up, down)?, mover, frame_delay)
            .map(|actor| actor.with_boundary(Boundary::Wrap { axis: Axis::Vertical, min, max }))
    }

    /// Moves in any of the four directions, swapping image sets as it turns, and
    /// stays inside `limits`.
    pub fn four_way(
        position: IVec2,
        images: DirectionalImages,
        mover: Mover,
        frame_delay: u32,
        limits: Clamp,
    ) -> Result<Self, AnimationError> {
        Self::directional(position, images, mover, frame_delay).map(|actor| actor.with_boundary(Boundary::Clamp(limits)))
    }

    /// An animated, clamped actor that turns randomly whenever it hits a wall.
    pub fn monster(position: IVec2, images: &[Image], mover: Mover, frame_delay: u32, limits: Clamp) -> Result<Self, AnimationError> {
        Self::animated_moving_sprite(position, images, mover, frame_delay, limits).map(Self::wandering)
    }

    fn directional(position: IVec2, images: DirectionalImages, mover: Mover, frame_delay: u32) -> Result<Self, AnimationError> {
        let placeholder = images.first().ok_or(AnimationError::EmptySequence)?;
        Self::new(sprite_at(position, placeholder)?)
            .with_mover(mover)
            .with_directional_images(images, frame_delay)
    }

    /// Spawns the actor on the actor layer, drawn above everything spawned before it.
    pub fn spawn(self, world: &mut World) -> EntityWorldMut<'_> {
        let order = DrawOrder::next(world, Layer::Actors);
        let mut entity = world.spawn((self.sprite, order, Collider));
        if let Some(mover) = self.mover {
            entity.insert(mover);
        }
        if let Some(animation) = self.animation {
            entity.insert(animation);
        }
        if let Some(images) = self.images {
            entity.insert(images);
        }
        if let Some(boundary) = self.boundary {
            entity.insert(boundary);
        }
        if self.wander {
            entity.insert(Wander);
        }
        entity
    }
}

fn sprite_at(position: IVec2, images: &[Image]) -> Result<Sprite, AnimationError> {
    let first = images.first().ok_or(AnimationError::EmptySequence)?;
    Ok(Sprite::with_image(position.x, position.y, *first))
}
