use glam::IVec2;
use pacman_arcade::entity::boundary::{Axis, Boundary, Clamp};
use pacman_arcade::entity::direction::Direction;
use pacman_arcade::entity::mover::Mover;
use pacman_arcade::entity::sprite::Sprite;
use speculoos::prelude::*;

mod common;

#[test]
fn test_negative_speed_is_stored_as_magnitude() {
    let mut mover = Mover::new(Direction::Right, 25, -3);
    assert_that(&mover.speed()).is_equal_to(3);

    mover.set_speed(-7);
    assert_that(&mover.speed()).is_equal_to(7);
}

#[test]
fn test_mover_steps_once_delay_reached() {
    let mut mover = common::mover(Direction::Right);
    let mut sprite = Sprite::new(100, 50, 12, 12);

    assert_that(&mover.update(25, &mut sprite)).is_true();
    assert_that(&sprite.position()).is_equal_to(IVec2::new(103, 50));
    assert_that(&mover.elapsed()).is_equal_to(0);
}

#[test]
fn test_mover_waits_below_delay() {
    let mut mover = common::mover(Direction::Right);
    let mut sprite = Sprite::new(100, 50, 12, 12);

    assert_that(&mover.update(10, &mut sprite)).is_false();
    assert_that(&mover.update(10, &mut sprite)).is_false();
    assert_that(&sprite.position()).is_equal_to(IVec2::new(100, 50));
    assert_that(&mover.elapsed()).is_equal_to(20);

    mover.update(10, &mut sprite);
    assert_that(&sprite.position()).is_equal_to(IVec2::new(103, 50));
}

#[test]
fn test_large_delta_moves_only_one_step() {
    let mut mover = common::mover(Direction::Down);
    let mut sprite = Sprite::new(0, 0, 12, 12);

    mover.update(1000, &mut sprite);

    assert_that(&sprite.position()).is_equal_to(IVec2::new(0, 3));
    assert_that(&mover.elapsed()).is_equal_to(0);
}

#[test]
fn test_stopped_mover_stays_put() {
    let mut mover = common::mover(Direction::Stopped);
    let mut sprite = Sprite::new(5, 5, 12, 12);

    mover.update(25, &mut sprite);

    assert_that(&sprite.position()).is_equal_to(IVec2::new(5, 5));
}

#[test]
fn test_backup_undoes_a_step() {
    for direction in Direction::DIRECTIONS {
        let mut mover = common::mover(direction);
        let mut sprite = Sprite::new(40, 40, 12, 12);

        mover.update(25, &mut sprite);
        mover.backup(&mut sprite);

        assert_that(&sprite.position()).is_equal_to(IVec2::new(40, 40));
    }
}

#[test]
fn test_clamp_pulls_sprite_inside() {
    let clamp = Clamp::new(0, 452, 0, 500);

    let mut sprite = Sprite::new(-4, 10, 12, 12);
    clamp.clamp_all(&mut sprite);
    assert_that(&sprite.position()).is_equal_to(IVec2::new(0, 10));

    let mut sprite = Sprite::new(445, 495, 12, 12);
    clamp.clamp_all(&mut sprite);
    assert_that(&sprite.position()).is_equal_to(IVec2::new(440, 488));
}

#[test]
fn test_clamp_is_idempotent() {
    let clamp = Clamp::new(0, 100, 0, 100);
    let starts = [
        Sprite::new(-50, -50, 12, 12),
        Sprite::new(95, 40, 12, 12),
        Sprite::new(40, 95, 12, 12),
        Sprite::new(30, 30, 12, 12),
        Sprite::new(-10, 5, 150, 12),
    ];

    for start in starts {
        let mut once = start.clone();
        clamp.clamp_all(&mut once);
        let mut twice = once.clone();
        clamp.clamp_all(&mut twice);

        assert_that(&twice).is_equal_to(&once);
    }
}

#[test]
fn test_default_clamp_is_window() {
    assert_that(&Clamp::default()).is_equal_to(Clamp::new(0, 800, 0, 600));
}

#[test]
fn test_clamp_boundary_needs_no_mover() {
    let boundary = Boundary::Clamp(Clamp::new(0, 100, 0, 100));
    let mut sprite = Sprite::new(120, 120, 10, 10);

    boundary.apply(&mut sprite, None);

    assert_that(&sprite.position()).is_equal_to(IVec2::new(90, 90));
}

#[test]
fn test_horizontal_bounce_turns_around() {
    let boundary = Boundary::Bounce {
        axis: Axis::Horizontal,
        min: 0,
        max: 100,
    };

    let mut mover = common::mover(Direction::Right);
    let mut sprite = Sprite::new(95, 10, 10, 10);
    boundary.apply(&mut sprite, Some(&mut mover));
    assert_that(&sprite.right()).is_equal_to(100);
    assert_that(&mover.direction).is_equal_to(Direction::Left);

    let mut sprite = Sprite::new(-2, 10, 10, 10);
    boundary.apply(&mut sprite, Some(&mut mover));
    assert_that(&sprite.left()).is_equal_to(0);
    assert_that(&mover.direction).is_equal_to(Direction::Right);
}

#[test]
fn test_vertical_bounce_turns_around() {
    let boundary = Boundary::Bounce {
        axis: Axis::Vertical,
        min: 10,
        max: 60,
    };
    let mut mover = common::mover(Direction::Down);
    let mut sprite = Sprite::new(0, 55, 10, 10);

    boundary.apply(&mut sprite, Some(&mut mover));

    assert_that(&sprite.bottom()).is_equal_to(60);
    assert_that(&mover.direction).is_equal_to(Direction::Up);
}

#[test]
fn test_bounce_ignores_moving_away_from_edge() {
    let boundary = Boundary::Bounce {
        axis: Axis::Horizontal,
        min: 0,
        max: 100,
    };
    let mut mover = common::mover(Direction::Left);
    let mut sprite = Sprite::new(95, 10, 10, 10);

    boundary.apply(&mut sprite, Some(&mut mover));

    assert_that(&sprite.left()).is_equal_to(95);
    assert_that(&mover.direction).is_equal_to(Direction::Left);
}

#[test]
fn test_wrap_waits_until_fully_past_edge() {
    let boundary = Boundary::Wrap {
        axis: Axis::Horizontal,
        min: 0,
        max: 452,
    };
    let mut mover = common::mover(Direction::Left);

    let mut sprite = Sprite::new(-10, 0, 12, 12);
    boundary.apply(&mut sprite, Some(&mut mover));
    assert_that(&sprite.left()).is_equal_to(-10);

    let mut sprite = Sprite::new(-13, 0, 12, 12);
    boundary.apply(&mut sprite, Some(&mut mover));
    assert_that(&sprite.left()).is_equal_to(452);
    assert_that(&mover.direction).is_equal_to(Direction::Left);
}

#[test]
fn test_wrap_right_and_vertical() {
    let horizontal = Boundary::Wrap {
        axis: Axis::Horizontal,
        min: 0,
        max: 452,
    };
    let mut mover = common::mover(Direction::Right);
    let mut sprite = Sprite::new(453, 0, 12, 12);
    horizontal.apply(&mut sprite, Some(&mut mover));
    assert_that(&sprite.right()).is_equal_to(0);

    let vertical = Boundary::Wrap {
        axis: Axis::Vertical,
        min: 0,
        max: 500,
    };
    let mut mover = common::mover(Direction::Up);
    let mut sprite = Sprite::new(0, -13, 12, 12);
    vertical.apply(&mut sprite, Some(&mut mover));
    assert_that(&sprite.top()).is_equal_to(500);

    mover.direction = Direction::Down;
    let mut sprite = Sprite::new(0, 501, 12, 12);
    vertical.apply(&mut sprite, Some(&mut mover));
    assert_that(&sprite.bottom()).is_equal_to(0);
}
