use bevy_ecs::component::Component;
use smallvec::SmallVec;

use crate::entity::sprite::Sprite;
use crate::error::AnimationError;
use crate::texture::Image;

/// Cycles a sprite's image through a sequence, one frame every `frame_delay`
/// milliseconds.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    images: SmallVec<[Image; 4]>,
    frame_delay: u32,
    current_frame: usize,
    elapsed: u32,
    looping: bool,
    paused: bool,
}

impl Animation {
    pub fn new(images: impl IntoIterator<Item = Image>, frame_delay: u32, looping: bool) -> Result<Self, AnimationError> {
        let images: SmallVec<[Image; 4]> = images.into_iter().collect();
        if images.is_empty() {
            return Err(AnimationError::EmptySequence);
        }

        Ok(Self {
            images,
            frame_delay,
            current_frame: 0,
            elapsed: 0,
            looping,
            paused: false,
        })
    }

    /// Advances the animation by `delta` milliseconds and shows the current frame on
    /// `sprite`.
    ///
    /// Frames advance once the accumulated time strictly exceeds the frame delay, at
    /// most one frame per call. A non-looping animation stops on its last frame and
    /// pauses itself. While paused the accumulator is held at zero and the sprite
    /// is left alone.
    pub fn update(&mut self, delta: u32, sprite: &mut Sprite) {
        if self.paused {
            self.elapsed = 0;
            return;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed > self.frame_delay {
            self.elapsed = 0;
            if self.current_frame + 1 < self.images.len() {
                self.current_frame += 1;
            } else if self.looping {
                self.current_frame = 0;
            } else {
                self.paused = true;
            }
        }

        sprite.set_image(self.current_image());
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Swaps in a new image sequence, keeping the frame index when it still fits.
    pub fn set_images(&mut self, images: &[Image]) -> Result<(), AnimationError> {
        if images.is_empty() {
            return Err(AnimationError::EmptySequence);
        }
        self.images = SmallVec::from_slice(images);
        self.current_frame = self.current_frame.min(self.images.len() - 1);
        Ok(())
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn current_image(&self) -> Image {
        self.images[self.current_frame]
    }

    pub fn frame_delay(&self) -> u32 {
        self.frame_delay
    }

    pub fn set_frame_delay(&mut self, frame_delay: u32) {
        self.frame_delay = frame_delay;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
