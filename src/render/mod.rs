//! The drawing seam between the game and whatever displays it.

use glam::IVec2;
use sdl2::pixels::Color;

use crate::entity::sprite::{Bounds, Style};
use crate::error::RenderError;
use crate::texture::Image;

pub mod sdl;

/// Something sprites can be drawn onto.
pub trait Surface {
    /// Wipes everything drawn so far.
    fn clear(&mut self) -> Result<(), RenderError>;

    /// Draws a rectangle covering `bounds`, filled and bordered according to `style`.
    fn draw_rect(&mut self, bounds: Bounds, style: &Style) -> Result<(), RenderError>;

    /// Draws `image` with its top-left corner at `top_left`.
    fn draw_image(&mut self, image: Image, top_left: IVec2) -> Result<(), RenderError>;

    /// Draws `text` centred on `center`.
    fn draw_text(&mut self, text: &str, center: IVec2, color: Color) -> Result<(), RenderError>;
}
