use glam::UVec2;

use crate::asset::Asset;

pub mod animated;
pub mod directional;

/// A handle to a pre-loaded, pre-sized image.
///
/// The game logic only ever needs an image's size; the pixels live with whatever
/// surface ends up drawing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Image {
    pub asset: Asset,
    pub size: UVec2,
}

impl Image {
    pub fn new(asset: Asset, size: UVec2) -> Self {
        Self { asset, size }
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }
}
