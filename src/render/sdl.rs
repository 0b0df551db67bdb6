//! Drawing onto an SDL2 window canvas.

use std::collections::HashMap;

use glam::{IVec2, UVec2};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::asset::Asset;
use crate::entity::sprite::{Bounds, Style};
use crate::error::RenderError;
use crate::render::Surface;
use crate::texture::Image;

/// Width and height of a glyph in the SDL2_gfx built-in font.
const GLYPH_SIZE: i32 = 8;

/// Loaded textures, keyed by asset. Assets whose file failed to load are absent.
pub struct TextureStore {
    textures: HashMap<Asset, Texture>,
}

impl TextureStore {
    /// Loads every asset, logging the ones that could not be loaded.
    pub fn load(creator: &TextureCreator<WindowContext>) -> Self {
        let mut textures = HashMap::new();
        for asset in Asset::iter() {
            match creator.load_texture(asset.path()) {
                Ok(texture) => {
                    debug!(asset = asset.as_ref(), path = asset.path(), "Texture loaded");
                    textures.insert(asset, texture);
                }
                Err(error) => {
                    warn!(asset = asset.as_ref(), path = asset.path(), %error, "Texture missing, drawing a placeholder");
                }
            }
        }
        Self { textures }
    }

    pub fn get(&self, asset: Asset) -> Option<&Texture> {
        self.textures.get(&asset)
    }
}

/// A [`Surface`] drawing into one area of a window canvas. Coordinates are
/// relative to the area's top-left corner.
pub struct SdlSurface<'a> {
    canvas: &'a mut Canvas<Window>,
    textures: &'a TextureStore,
    area: Rect,
    clear_color: Color,
}

impl<'a> SdlSurface<'a> {
    pub fn new(canvas: &'a mut Canvas<Window>, textures: &'a TextureStore, offset: IVec2, size: UVec2, clear_color: Color) -> Self {
        Self {
            canvas,
            textures,
            area: Rect::new(offset.x, offset.y, size.x, size.y),
            clear_color,
        }
    }

    fn offset(&self) -> IVec2 {
        IVec2::new(self.area.x(), self.area.y())
    }

    fn rect(&self, top_left: IVec2, width: u32, height: u32) -> Rect {
        let at = top_left + self.offset();
        Rect::new(at.x, at.y, width, height)
    }
}

impl Surface for SdlSurface<'_> {
    /// Clears the surface's own area only, leaving the rest of the window alone.
    fn clear(&mut self) -> Result<(), RenderError> {
        self.canvas.set_draw_color(self.clear_color);
        self.canvas.fill_rect(self.area).map_err(RenderError::Failed)
    }

    fn draw_rect(&mut self, bounds: Bounds, style: &Style) -> Result<(), RenderError> {
        let top_left = IVec2::new(bounds.left, bounds.top);
        let (width, height) = (bounds.width().max(0) as u32, bounds.height().max(0) as u32);

        if let Some(fill) = style.fill {
            let rect = self.rect(top_left, width, height);
            self.canvas.set_draw_color(fill);
            self.canvas.fill_rect(rect).map_err(RenderError::Failed)?;
        }

        if let Some(border) = style.border_color {
            self.canvas.set_draw_color(border);
            for inset in 0..style.border_width.min(width / 2).min(height / 2) {
                let rect = self.rect(top_left + IVec2::splat(inset as i32), width - 2 * inset, height - 2 * inset);
                self.canvas.draw_rect(rect).map_err(RenderError::Failed)?;
            }
        }
        Ok(())
    }

    fn draw_image(&mut self, image: Image, top_left: IVec2) -> Result<(), RenderError> {
        let dest = self.rect(top_left, image.width(), image.height());
        match self.textures.get(image.asset) {
            Some(texture) => self.canvas.copy(texture, None, dest).map_err(RenderError::Failed),
            None => {
                self.canvas.set_draw_color(image.asset.placeholder_color());
                self.canvas.fill_rect(dest).map_err(RenderError::Failed)
            }
        }
    }

    fn draw_text(&mut self, text: &str, center: IVec2, color: Color) -> Result<(), RenderError> {
        let width = text.chars().count() as i32 * GLYPH_SIZE;
        let at = center + self.offset() - IVec2::new(width / 2, GLYPH_SIZE / 2);
        self.canvas
            .string(at.x as i16, at.y as i16, text, color)
            .map_err(RenderError::Failed)
    }
}
