//! Every image the game draws, with the file it is loaded from and the size it is
//! scaled to on load.

use glam::UVec2;
use sdl2::pixels::Color;
use strum_macros::{AsRefStr, EnumIter};

use crate::constants::{ACTOR_IMAGE_SIZE, CANVAS_SIZE, WINDOW_SIZE};
use crate::texture::Image;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub enum Asset {
    Maze,
    PacmanClosed,
    PacmanUp,
    PacmanDown,
    PacmanLeft,
    PacmanRight,
    RedGhost,
    GreenGhost,
    YellowGhost,
    PinkGhost,
    Splash,
    GameOver,
}

impl Asset {
    /// Path of the image file, relative to the working directory.
    pub fn path(self) -> &'static str {
        use Asset::*;
        match self {
            Maze => "images/Originalpacmaze.png",
            PacmanClosed => "images/pacclosed.png",
            PacmanUp => "images/pacup.png",
            PacmanDown => "images/pacdown.png",
            PacmanLeft => "images/pacleft.png",
            PacmanRight => "images/pacright.png",
            RedGhost => "images/redghost.png",
            GreenGhost => "images/greenghost.png",
            YellowGhost => "images/yellowghost.png",
            PinkGhost => "images/pinkghost.png",
            Splash => "images/splashscreen.png",
            GameOver => "images/gameover.jpg",
        }
    }

    /// The size the image is scaled to once loaded.
    pub fn size(self) -> UVec2 {
        use Asset::*;
        match self {
            Maze => CANVAS_SIZE,
            Splash | GameOver => WINDOW_SIZE,
            _ => UVec2::splat(ACTOR_IMAGE_SIZE),
        }
    }

    /// A pre-sized handle for this asset.
    pub fn image(self) -> Image {
        Image::new(self, self.size())
    }

    /// Flat colour drawn in place of the image when its file could not be loaded.
    pub fn placeholder_color(self) -> Color {
        use Asset::*;
        match self {
            Maze => Color::RGB(0x22, 0x22, 0x22),
            PacmanClosed | PacmanUp | PacmanDown | PacmanLeft | PacmanRight => Color::YELLOW,
            RedGhost => Color::RED,
            GreenGhost => Color::GREEN,
            YellowGhost => Color::RGB(255, 165, 0),
            PinkGhost => Color::RGB(255, 184, 255),
            Splash => Color::BLUE,
            GameOver => Color::BLACK,
        }
    }
}
