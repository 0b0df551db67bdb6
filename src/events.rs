use std::time::Duration;

use bevy_ecs::event::Event;
use strum_macros::Display;

use crate::entity::direction::Direction;
use crate::screen::Screen;

/// Player intents, produced by the key bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    MovePlayer(Direction),
    ResetLevel,
    TogglePause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
}

/// Requests the game screen makes of the application around it.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Finished(Outcome),
    ShowScreen(Screen),
    ExitAfter(Duration),
}
