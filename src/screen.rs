//! The named screens of the application and the router switching between them.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Screen {
    Splash,
    Menu,
    Instructions,
    PlayGame,
    GameOver,
}

/// Tracks which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: Screen,
}

impl Router {
    pub fn new(initial: Screen) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Shows `screen`, returning the screen it replaced, or `None` if it was
    /// already showing.
    pub fn show(&mut self, screen: Screen) -> Option<Screen> {
        if self.current == screen {
            return None;
        }
        let previous = std::mem::replace(&mut self.current, screen);
        info!(from = %previous, to = %screen, "Screen transition");
        Some(previous)
    }

    /// Shows the screen called `name`.
    pub fn show_by_name(&mut self, name: &str) -> Result<Option<Screen>, strum::ParseError> {
        let screen = Screen::from_str(name)?;
        Ok(self.show(screen))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Screen::Splash)
    }
}
