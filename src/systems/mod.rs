//! The systems driving the game screen, and the schedules running them.

use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule};

pub mod animation;
pub mod collision;
pub mod components;
pub mod movement;

pub use self::animation::*;
pub use self::collision::*;
pub use self::movement::*;

/// Movement, boundaries and animation: everything an actor does on its own.
pub fn actor_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems((movement_system, boundary_system, directional_images_system, animation_system).chain());
    schedule
}

/// One full game update: actors first, then the win check and collision
/// resolution, in that order.
pub fn game_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            movement_system,
            boundary_system,
            directional_images_system,
            animation_system,
            win_check_system,
            wall_collision_system,
            pill_pickup_system,
            ghost_contact_system,
        )
            .chain(),
    );
    schedule
}
