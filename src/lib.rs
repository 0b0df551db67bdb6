//! Pac-Man game library crate.

pub mod app;
pub mod asset;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod map;
pub mod render;
pub mod scheduler;
pub mod screen;
pub mod systems;
pub mod texture;
