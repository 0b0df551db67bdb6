use bevy_ecs::system::{Query, Res};
use tracing::warn;

use crate::entity::mover::Mover;
use crate::entity::sprite::Sprite;
use crate::systems::components::DeltaTime;
use crate::texture::animated::Animation;
use crate::texture::directional::DirectionalImages;

/// Switches each animation to the image set matching its actor's direction.
pub fn directional_images_system(mut query: Query<(&Mover, &DirectionalImages, &mut Animation)>) {
    for (mover, images, mut animation) in query.iter_mut() {
        let Some(set) = images.get(mover.direction) else {
            continue;
        };
        if animation.images() == set {
            continue;
        }
        if let Err(error) = animation.set_images(set) {
            warn!(?error, direction = ?mover.direction, "Could not switch image set");
        }
    }
}

/// Advances every animation and shows its current frame.
pub fn animation_system(delta: Res<DeltaTime>, mut query: Query<(&mut Animation, &mut Sprite)>) {
    for (mut animation, mut sprite) in query.iter_mut() {
        animation.update(delta.0, &mut sprite);
    }
}
