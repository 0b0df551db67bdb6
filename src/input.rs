use std::collections::HashMap;

use sdl2::keyboard::Keycode;

use crate::entity::direction::Direction;
use crate::events::GameCommand;

/// Keyboard bindings for the game screen.
#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        key_bindings.insert(Keycode::Up, GameCommand::MovePlayer(Direction::Up));
        key_bindings.insert(Keycode::Down, GameCommand::MovePlayer(Direction::Down));
        key_bindings.insert(Keycode::Left, GameCommand::MovePlayer(Direction::Left));
        key_bindings.insert(Keycode::Right, GameCommand::MovePlayer(Direction::Right));

        key_bindings.insert(Keycode::P, GameCommand::TogglePause);
        key_bindings.insert(Keycode::R, GameCommand::ResetLevel);
        key_bindings.insert(Keycode::Escape, GameCommand::Exit);
        key_bindings.insert(Keycode::Q, GameCommand::Exit);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command(&self, key: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }

    pub fn bind(&mut self, key: Keycode, command: GameCommand) -> Option<GameCommand> {
        self.key_bindings.insert(key, command)
    }
}
