use std::time::Duration;

use bevy_ecs::system::RunSystemOnce;
use bevy_ecs::world::World;
use glam::{IVec2, UVec2};
use pacman_arcade::entity::direction::Direction;
use pacman_arcade::entity::mover::Mover;
use pacman_arcade::entity::sprite::Sprite;
use pacman_arcade::entity::wander::Wander;
use pacman_arcade::events::{GameEvent, Outcome};
use pacman_arcade::map::builder::spawn_decorations;
use pacman_arcade::map::{CellKind, Maze};
use pacman_arcade::screen::Screen;
use pacman_arcade::systems::components::{Collider, DrawOrder, Layer, LoopState, Pill, PillCounter};
use pacman_arcade::systems::{ghost_contact_system, pill_pickup_system, wall_collision_system, win_check_system};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn spawn_ghost(world: &mut World, x: i32, y: i32, direction: Direction) -> bevy_ecs::entity::Entity {
    let order = DrawOrder::next(world, Layer::Actors);
    world
        .spawn((Sprite::new(x, y, 12, 12), common::mover(direction), order, Collider, Wander))
        .id()
}

fn game_over_events(outcome: Outcome) -> Vec<GameEvent> {
    vec![
        GameEvent::Finished(outcome),
        GameEvent::ShowScreen(Screen::GameOver),
        GameEvent::ExitAfter(Duration::from_secs(3)),
    ]
}

#[test]
fn test_player_backs_out_of_wall() {
    let mut world = common::create_test_world();
    common::spawn_wall(&mut world, 3, 19);
    let player = common::spawn_player(&mut world, 22, 22);
    {
        let mut entity = world.entity_mut(player);
        entity.get_mut::<Mover>().unwrap().direction = Direction::Left;
        entity.get_mut::<Sprite>().unwrap().set_position(IVec2::new(19, 22));
    }

    world.run_system_once(wall_collision_system).unwrap();

    let sprite = world.get::<Sprite>(player).unwrap();
    assert_that(&sprite.position()).is_equal_to(IVec2::new(22, 22));
    assert_that(&world.get::<Mover>(player).unwrap().direction).is_equal_to(Direction::Left);
}

#[test]
fn test_actor_clear_of_walls_is_untouched() {
    let mut world = common::create_test_world();
    common::spawn_wall(&mut world, 3, 3);
    let player = common::spawn_player(&mut world, 40, 40);
    world.get_mut::<Mover>(player).unwrap().direction = Direction::Right;

    world.run_system_once(wall_collision_system).unwrap();

    assert_that(&world.get::<Sprite>(player).unwrap().position()).is_equal_to(IVec2::new(40, 40));
}

#[test]
fn test_actor_backs_up_once_per_overlapping_wall() {
    let mut world = common::create_test_world();
    common::spawn_wall(&mut world, 0, 0);
    common::spawn_wall(&mut world, 16, 0);
    let player = common::spawn_player(&mut world, 10, 10);
    world.get_mut::<Mover>(player).unwrap().direction = Direction::Up;

    world.run_system_once(wall_collision_system).unwrap();

    assert_that(&world.get::<Sprite>(player).unwrap().position()).is_equal_to(IVec2::new(10, 16));
}

#[test]
fn test_wandering_actor_turns_at_walls() {
    for _ in 0..20 {
        let mut world = common::create_test_world();
        common::spawn_wall(&mut world, 200, 200);
        let ghost = spawn_ghost(&mut world, 205, 213, Direction::Up);

        world.run_system_once(wall_collision_system).unwrap();

        assert_that(&world.get::<Sprite>(ghost).unwrap().position()).is_equal_to(IVec2::new(205, 216));
        let direction = world.get::<Mover>(ghost).unwrap().direction;
        assert_that(&[Direction::Left, Direction::Right, Direction::Up].contains(&direction)).is_true();
    }
}

#[test]
fn test_player_eats_touching_pills() {
    let mut world = common::create_test_world();
    world.insert_resource(Maze::parse(&["#..#", "####"]).unwrap());
    spawn_decorations(&mut world);
    world.insert_resource(PillCounter(2));
    common::spawn_player(&mut world, 22, 6);

    world.run_system_once(pill_pickup_system).unwrap();

    let maze = world.resource::<Maze>();
    assert_that(&maze.kind(UVec2::new(1, 0))).is_equal_to(Some(CellKind::Blank));
    assert_that(&maze.get(UVec2::new(1, 0)).unwrap().decoration).is_none();
    assert_that(&maze.kind(UVec2::new(2, 0))).is_equal_to(Some(CellKind::Pill));
    assert_that(&world.resource::<PillCounter>().0).is_equal_to(1);

    let pills: Vec<Pill> = world.query::<&Pill>().iter(&world).copied().collect();
    assert_eq!(pills, vec![Pill { cell: UVec2::new(2, 0) }]);
}

#[test]
fn test_no_player_no_pickup() {
    let mut world = common::create_test_world();
    world.insert_resource(Maze::parse(&["."]).unwrap());
    spawn_decorations(&mut world);

    world.run_system_once(pill_pickup_system).unwrap();

    assert_that(&world.resource::<PillCounter>().0).is_equal_to(1);
}

#[test]
fn test_win_needs_an_empty_counter() {
    let mut world = common::create_test_world();

    world.run_system_once(win_check_system).unwrap();
    assert_that(&common::drain_events(&mut world)).is_empty();

    world.insert_resource(PillCounter(0));
    world.run_system_once(win_check_system).unwrap();

    assert_eq!(common::drain_events(&mut world), game_over_events(Outcome::Won));
    let state = *world.resource::<LoopState>();
    assert_that(&state.paused).is_true();
    assert_that(&state.game_over).is_true();
}

#[test]
fn test_ghost_touching_player_loses() {
    let mut world = common::create_test_world();
    common::spawn_player(&mut world, 100, 100);
    spawn_ghost(&mut world, 112, 105, Direction::Left);

    world.run_system_once(ghost_contact_system).unwrap();

    assert_eq!(common::drain_events(&mut world), game_over_events(Outcome::Lost));
}

#[test]
fn test_distant_ghost_is_harmless() {
    let mut world = common::create_test_world();
    common::spawn_player(&mut world, 100, 100);
    spawn_ghost(&mut world, 113, 100, Direction::Left);

    world.run_system_once(ghost_contact_system).unwrap();

    assert_that(&common::drain_events(&mut world)).is_empty();
    assert_that(&world.resource::<LoopState>().game_over).is_false();
}

#[test]
fn test_game_ends_only_once() {
    let mut world = common::create_test_world();
    world.insert_resource(PillCounter(0));
    common::spawn_player(&mut world, 100, 100);
    spawn_ghost(&mut world, 100, 100, Direction::Up);
    spawn_ghost(&mut world, 104, 104, Direction::Down);

    world.run_system_once(win_check_system).unwrap();
    world.run_system_once(ghost_contact_system).unwrap();
    world.run_system_once(win_check_system).unwrap();

    assert_eq!(common::drain_events(&mut world), game_over_events(Outcome::Won));
}
