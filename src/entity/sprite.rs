//! Axis-aligned rectangles with an optional image, the building block of every
//! drawable in the game.

use bevy_ecs::component::Component;
use glam::{IVec2, UVec2};
use sdl2::pixels::Color;

use crate::error::{Dimension, RenderError, SpriteError};
use crate::render::Surface;
use crate::texture::Image;

/// Edges of a rectangle in pixel coordinates. `right` and `bottom` are exclusive
/// for containment but count as touching for intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Closed-interval overlap test: rectangles sharing only an edge intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.right < other.left || self.left > other.right || self.bottom < other.top || self.top > other.bottom)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// How a sprite's rectangle is drawn underneath its image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub border_color: Option<Color>,
    pub border_width: u32,
    pub fill: Option<Color>,
}

impl Style {
    pub const fn border(color: Color, width: u32) -> Self {
        Self {
            border_color: Some(color),
            border_width: width,
            fill: None,
        }
    }

    pub const fn filled(fill: Color) -> Self {
        Self {
            border_color: None,
            border_width: 0,
            fill: Some(fill),
        }
    }

    pub const fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Whether drawing this style would put any pixels on screen.
    pub fn is_visible(&self) -> bool {
        self.fill.is_some() || (self.border_color.is_some() && self.border_width > 0)
    }
}

/// A positioned rectangle, optionally backed by an image.
///
/// While an image is attached the sprite's size is the image's size, and the
/// width/height setters refuse to change it.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    position: IVec2,
    size: UVec2,
    image: Option<Image>,
    pub style: Style,
}

impl Sprite {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            position: IVec2::new(x, y),
            size: UVec2::new(width, height),
            image: None,
            style: Style::default(),
        }
    }

    pub fn with_image(x: i32, y: i32, image: Image) -> Self {
        Self {
            position: IVec2::new(x, y),
            size: image.size,
            image: Some(image),
            style: Style::default(),
        }
    }

    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    pub fn translate(&mut self, offset: IVec2) {
        self.position += offset;
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    pub fn set_width(&mut self, width: u32) -> Result<(), SpriteError> {
        if self.image.is_some() {
            return Err(SpriteError::ImageBacked {
                dimension: Dimension::Width,
            });
        }
        self.size.x = width;
        Ok(())
    }

    pub fn set_height(&mut self, height: u32) -> Result<(), SpriteError> {
        if self.image.is_some() {
            return Err(SpriteError::ImageBacked {
                dimension: Dimension::Height,
            });
        }
        self.size.y = height;
        Ok(())
    }

    pub fn image(&self) -> Option<Image> {
        self.image
    }

    /// Attaches `image`, adopting its size.
    pub fn set_image(&mut self, image: Image) {
        self.size = image.size;
        self.image = Some(image);
    }

    /// Detaches the image. The sprite keeps the image's size.
    pub fn clear_image(&mut self) -> Option<Image> {
        self.image.take()
    }

    pub fn left(&self) -> i32 {
        self.position.x
    }

    pub fn top(&self) -> i32 {
        self.position.y
    }

    pub fn right(&self) -> i32 {
        self.position.x + self.size.x as i32
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.y as i32
    }

    pub fn set_left(&mut self, left: i32) {
        self.position.x = left;
    }

    pub fn set_top(&mut self, top: i32) {
        self.position.y = top;
    }

    pub fn set_right(&mut self, right: i32) {
        self.position.x = right - self.size.x as i32;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.position.y = bottom - self.size.y as i32;
    }

    /// Centre point, rounded towards the top-left for odd sizes.
    pub fn center(&self) -> IVec2 {
        self.position + (self.size / 2).as_ivec2()
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.position = center - (self.size / 2).as_ivec2();
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.left(),
            top: self.top(),
            right: self.right(),
            bottom: self.bottom(),
        }
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.bounds().intersects(other)
    }

    /// Whether the point lies inside the sprite. Unlike intersection, the right and
    /// bottom edges are outside.
    pub fn contains(&self, point: IVec2) -> bool {
        (self.left()..self.right()).contains(&point.x) && (self.top()..self.bottom()).contains(&point.y)
    }

    /// Draws the styled rectangle, then the image on top of it.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        if self.style.is_visible() {
            surface.draw_rect(self.bounds(), &self.style)?;
        }
        if let Some(image) = self.image {
            surface.draw_image(image, self.position)?;
        }
        Ok(())
    }
}
