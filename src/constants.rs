//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{IVec2, UVec2};

/// Interval between two animate ticks of the game screen.
pub const LOOP_TIME: Duration = Duration::from_millis(8);

/// How long the game-over screen stays up before the application exits.
pub const EXIT_DELAY: Duration = Duration::from_secs(3);
/// How long the splash screen stays up before the menu is shown.
pub const SPLASH_DELAY: Duration = Duration::from_secs(3);

/// The size of the application window, in pixels.
pub const WINDOW_SIZE: UVec2 = UVec2::new(800, 600);
/// The size of the game canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(452, 500);

/// The size of each maze cell, in pixels.
pub const CELL_SIZE: u32 = 16;
/// The size of the game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 31);
/// The pixel position of the top-left corner of the first cell.
pub const BOARD_ORIGIN: IVec2 = IVec2::new(3, 3);

/// Pills are drawn as small squares inset from the top-left corner of their cell.
pub const PILL_INSET: i32 = 5;
pub const PILL_SIZE: u32 = 4;

/// The number of pills the player has to eat before the game is won.
pub const PILL_TARGET: i32 = 300;

/// Side length of the player and ghost images, in pixels.
pub const ACTOR_IMAGE_SIZE: u32 = 12;

/// The raw layout of the game board.
///
/// `#` is a wall, `.` a pill, a space a blank cell and `F` an unlabelled (fruit) cell.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.#####.##.#####.######",
    "######.#####.##.#####.######",
    "######.##..........##.######",
    "######.##.###  ###.##.######",
    "######.##.#      #.##.######",
    "..........#      #..........",
    "######.##.#      #.##.######",
    "######.##.########.##.######",
    "######.##..........##.######",
    "######.##.########.##.######",
    "######.##.########.##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#...##................##...#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        assert_eq!(LOOP_TIME.as_millis(), 8);
    }

    #[test]
    fn test_raw_board_dimensions() {
        assert_eq!(RAW_BOARD.len(), BOARD_CELL_SIZE.y as usize);

        for row in RAW_BOARD.iter() {
            assert_eq!(row.len(), BOARD_CELL_SIZE.x as usize);
        }
    }

    #[test]
    fn test_raw_board_boundaries() {
        assert!(RAW_BOARD[0].chars().all(|c| c == '#'));
        assert!(RAW_BOARD[RAW_BOARD.len() - 1].chars().all(|c| c == '#'));
    }

    #[test]
    fn test_raw_board_tunnel_row() {
        // Row 14 is open on both sides
        let tunnel_row = RAW_BOARD[14];
        assert_eq!(tunnel_row.chars().next(), Some('.'));
        assert_eq!(tunnel_row.chars().last(), Some('.'));
    }

    #[test]
    fn test_pill_target_matches_board() {
        let pills: usize = RAW_BOARD.iter().map(|row| row.chars().filter(|&c| c == '.').count()).sum();
        assert_eq!(pills as i32, PILL_TARGET);
    }

    #[test]
    fn test_board_fits_canvas() {
        let board_extent = BOARD_ORIGIN + (BOARD_CELL_SIZE * CELL_SIZE).as_ivec2();
        assert!(board_extent.x <= CANVAS_SIZE.x as i32);
        assert!(board_extent.y <= CANVAS_SIZE.y as i32);
    }
}
