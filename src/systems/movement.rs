use bevy_ecs::system::{Query, Res};
use tracing::trace;

use crate::entity::boundary::Boundary;
use crate::entity::mover::Mover;
use crate::entity::sprite::Sprite;
use crate::systems::components::DeltaTime;

/// Steps every moving sprite once its mover's delay has elapsed.
pub fn movement_system(delta: Res<DeltaTime>, mut query: Query<(&mut Mover, &mut Sprite)>) {
    for (mut mover, mut sprite) in query.iter_mut() {
        mover.update(delta.0, &mut sprite);
    }
}

/// Applies each actor's boundary policy after it has moved.
pub fn boundary_system(mut query: Query<(&Boundary, &mut Sprite, Option<&mut Mover>)>) {
    for (boundary, mut sprite, mut mover) in query.iter_mut() {
        let before = mover.as_deref().map(|mover| mover.direction);
        boundary.apply(&mut sprite, mover.as_deref_mut());

        let after = mover.as_deref().map(|mover| mover.direction);
        if before != after {
            trace!(?boundary, ?before, ?after, "Actor turned at boundary");
        }
    }
}
