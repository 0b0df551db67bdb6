//! Centralized error types for the game.
//!
//! Configuration mistakes (image-backed sprites resized by hand, empty animation
//! sequences, malformed maze layouts) surface here at construction time instead
//! of somewhere inside the hot loop.

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Sprite error: {0}")]
    Sprite(#[from] SpriteError),

    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),

    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised by sprite geometry mutations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteError {
    /// The sprite's size is owned by its image.
    #[error("cannot set {dimension} while the sprite has an image")]
    ImageBacked { dimension: Dimension },
}

/// Which side of a sprite an operation tried to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    #[error("animation requires at least one image")]
    EmptySequence,
}

/// Error type for maze layout parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),
    #[error("Board row {row} has {found} cells, expected {expected}")]
    InvalidDimensions { row: usize, found: usize, expected: usize },
}

/// Errors reported by a rendering surface.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Rendering failed: {0}")]
    Failed(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
