//! 2048 engine - slide, merge and spawn on a 4x4 grid
//!
//! The grid is a plain `[[u32; 4]; 4]` where 0 is an empty cell. Every move is
//! computed as a pure function of the previous grid ([`shift_grid`]); the
//! engine only commits the result, spawns a tile and re-checks the terminal
//! condition when the move actually changed something.
//!
//! Rows are the unit of work: Left merges each row as-is, Right merges the
//! reversed row and reverses it back, Up/Down do the same on the transposed
//! grid.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::rng::RandomSource;
use crate::snapshot::Board2048Snapshot;
use crate::types::{Direction, GRID_SIZE, INITIAL_TILES, SPAWN_FOUR_ONE_IN};

/// Row-major tile values, 0 = empty
pub type Grid = [[u32; GRID_SIZE]; GRID_SIZE];

/// Result of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Grid after the move (and after the spawn, if any)
    pub grid: Grid,
    /// Whether the slide changed the grid; only then was a tile spawned
    pub changed: bool,
    /// Whether the resulting grid has no legal continuation
    pub terminal: bool,
}

/// Slide a row toward index 0, merging equal neighbours once.
///
/// Zeros are compacted out, then equal adjacent pairs are summed scanning
/// left to right. A merged tile never merges again in the same call, so
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
///
/// # Examples
///
/// ```
/// use tile_arcade_core::board2048::slide_and_merge;
///
/// assert_eq!(slide_and_merge([2, 0, 2, 4]), [4, 4, 0, 0]);
/// assert_eq!(slide_and_merge([4, 4, 8, 8]), [8, 16, 0, 0]);
/// ```
pub fn slide_and_merge<const N: usize>(row: [u32; N]) -> [u32; N] {
    let mut out = [0u32; N];
    let mut write = 0usize;
    // Tile waiting for a partner.
    let mut pending: Option<u32> = None;

    for value in row.into_iter().filter(|&v| v != 0) {
        match pending {
            Some(p) if p == value => {
                out[write] = p + value;
                write += 1;
                pending = None;
            }
            Some(p) => {
                out[write] = p;
                write += 1;
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }

    if let Some(p) = pending {
        out[write] = p;
    }

    out
}

fn transpose(grid: &Grid) -> Grid {
    let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
    for (y, row) in grid.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            out[x][y] = v;
        }
    }
    out
}

fn merge_rows(grid: &Grid, reversed: bool) -> Grid {
    let mut out = *grid;
    for row in out.iter_mut() {
        if reversed {
            row.reverse();
            *row = slide_and_merge(*row);
            row.reverse();
        } else {
            *row = slide_and_merge(*row);
        }
    }
    out
}

/// Apply a slide in `direction` without spawning.
pub fn shift_grid(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => merge_rows(grid, false),
        Direction::Right => merge_rows(grid, true),
        Direction::Up => transpose(&merge_rows(&transpose(grid), false)),
        Direction::Down => transpose(&merge_rows(&transpose(grid), true)),
    }
}

/// True when the grid is full and no two orthogonal neighbours are equal.
///
/// This is the literal "no empty cell, no equal adjacent pair" rule; it does
/// not simulate moves.
pub fn is_terminal_grid(grid: &Grid) -> bool {
    if grid.iter().flatten().any(|&v| v == 0) {
        return false;
    }

    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let v = grid[y][x];
            if x + 1 < GRID_SIZE && grid[y][x + 1] == v {
                return false;
            }
            if y + 1 < GRID_SIZE && grid[y + 1][x] == v {
                return false;
            }
        }
    }

    true
}

/// Place a 2 (or, one time in ten, a 4) on a uniformly random empty cell.
///
/// Returns the `(row, col)` that was filled, or `None` if the grid is full.
pub fn add_random_tile(grid: &mut Grid, rng: &mut impl RandomSource) -> Option<(usize, usize)> {
    let mut empty: ArrayVec<(usize, usize), { GRID_SIZE * GRID_SIZE }> = ArrayVec::new();
    for (y, row) in grid.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v == 0 {
                empty.push((y, x));
            }
        }
    }

    if empty.is_empty() {
        return None;
    }

    let (y, x) = empty[rng.next_range(empty.len() as u32) as usize];
    let value = if rng.next_range(SPAWN_FOUR_ONE_IN) == 0 { 4 } else { 2 };
    grid[y][x] = value;
    debug!(row = y, col = x, value, "spawned tile");
    Some((y, x))
}

/// The 2048 game: a grid plus the random source used for spawns.
#[derive(Debug, Clone)]
pub struct Board2048<R> {
    grid: Grid,
    terminal: bool,
    moves: u32,
    rng: R,
}

impl<R: RandomSource> Board2048<R> {
    /// Create a new game: an empty grid with two spawned tiles.
    pub fn new(rng: R) -> Self {
        let mut board = Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            terminal: false,
            moves: 0,
            rng,
        };
        board.reset();
        board
    }

    /// Start from an explicit grid (no tiles are spawned).
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            terminal: is_terminal_grid(&grid),
            moves: 0,
            rng,
        }
    }

    /// Discard the current grid and spawn a fresh one.
    pub fn reset(&mut self) {
        self.grid = [[0; GRID_SIZE]; GRID_SIZE];
        for _ in 0..INITIAL_TILES {
            add_random_tile(&mut self.grid, &mut self.rng);
        }
        self.terminal = false;
        self.moves = 0;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Number of accepted (grid-changing) moves since the last reset.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Largest tile on the grid.
    pub fn max_tile(&self) -> u32 {
        self.grid.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Slide the grid in `direction`.
    ///
    /// A move that changes nothing is reported with `changed = false` and
    /// leaves the grid and random source untouched.
    pub fn move_tiles(&mut self, direction: Direction) -> MoveOutcome {
        let shifted = shift_grid(&self.grid, direction);
        let changed = shifted != self.grid;

        if changed {
            self.grid = shifted;
            self.moves = self.moves.wrapping_add(1);
            add_random_tile(&mut self.grid, &mut self.rng);
            self.terminal = is_terminal_grid(&self.grid);
            if self.terminal {
                debug!(moves = self.moves, max_tile = self.max_tile(), "2048 board locked up");
            }
        }

        MoveOutcome {
            grid: self.grid,
            changed,
            terminal: self.terminal,
        }
    }

    pub fn snapshot_into(&self, out: &mut Board2048Snapshot) {
        out.grid = self.grid;
        out.terminal = self.terminal;
        out.moves = self.moves;
        out.max_tile = self.max_tile();
    }

    pub fn snapshot(&self) -> Board2048Snapshot {
        let mut s = Board2048Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{SequenceRng, SimpleRng};

    fn non_zero(grid: &Grid) -> usize {
        grid.iter().flatten().filter(|&&v| v != 0).count()
    }

    #[test]
    fn test_slide_and_merge_examples() {
        assert_eq!(slide_and_merge([2, 0, 2, 4]), [4, 4, 0, 0]);
        assert_eq!(slide_and_merge([4, 4, 8, 8]), [8, 16, 0, 0]);
        assert_eq!(slide_and_merge([2, 2, 2, 2]), [4, 4, 0, 0]);
        assert_eq!(slide_and_merge([2, 2, 2, 0]), [4, 2, 0, 0]);
        assert_eq!(slide_and_merge([0, 0, 0, 2]), [2, 0, 0, 0]);
        assert_eq!(slide_and_merge([2, 4, 8, 16]), [2, 4, 8, 16]);
        assert_eq!(slide_and_merge([0, 0, 0, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_slide_and_merge_no_chain() {
        // 4 + 4 must not merge with the 8 it produces.
        assert_eq!(slide_and_merge([4, 4, 8, 0]), [8, 8, 0, 0]);
    }

    #[test]
    fn test_slide_and_merge_other_lengths() {
        assert_eq!(slide_and_merge([2, 2, 4]), [4, 4, 0]);
        assert_eq!(slide_and_merge([8]), [8]);
        assert_eq!(slide_and_merge([2, 0, 0, 2, 2, 0]), [4, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_shift_grid_directions() {
        let grid: Grid = [
            [2, 0, 0, 2],
            [0, 4, 0, 0],
            [0, 0, 0, 0],
            [2, 0, 0, 0],
        ];

        let left = shift_grid(&grid, Direction::Left);
        assert_eq!(left[0], [4, 0, 0, 0]);
        assert_eq!(left[1], [4, 0, 0, 0]);
        assert_eq!(left[3], [2, 0, 0, 0]);

        let right = shift_grid(&grid, Direction::Right);
        assert_eq!(right[0], [0, 0, 0, 4]);
        assert_eq!(right[1], [0, 0, 0, 4]);

        let up = shift_grid(&grid, Direction::Up);
        assert_eq!(up[0], [4, 4, 0, 2]);
        assert_eq!(up[1], [0, 0, 0, 0]);

        let down = shift_grid(&grid, Direction::Down);
        assert_eq!(down[3], [4, 4, 0, 2]);
        assert_eq!(down[0], [0, 0, 0, 0]);
    }

    #[test]
    fn test_terminal_detection() {
        let locked: Grid = [
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ];
        assert!(is_terminal_grid(&locked));

        let mut with_gap = locked;
        with_gap[2][1] = 0;
        assert!(!is_terminal_grid(&with_gap));

        let mut vertical_pair = locked;
        vertical_pair[1][0] = 2;
        assert!(!is_terminal_grid(&vertical_pair));

        let mut horizontal_pair = locked;
        horizontal_pair[3][3] = 4;
        assert!(!is_terminal_grid(&horizontal_pair));
    }

    #[test]
    fn test_add_random_tile_uses_rng() {
        let mut grid: Grid = [[0; GRID_SIZE]; GRID_SIZE];
        // Cell index 5 -> (1, 1); roll 0 -> a 4.
        let mut rng = SequenceRng::new(vec![5, 0]);
        assert_eq!(add_random_tile(&mut grid, &mut rng), Some((1, 1)));
        assert_eq!(grid[1][1], 4);

        // Index 0 of the remaining empties, roll 3 -> a 2.
        let mut rng = SequenceRng::new(vec![0, 3]);
        assert_eq!(add_random_tile(&mut grid, &mut rng), Some((0, 0)));
        assert_eq!(grid[0][0], 2);
    }

    #[test]
    fn test_add_random_tile_full_grid_is_noop() {
        let mut grid: Grid = [[2; GRID_SIZE]; GRID_SIZE];
        let mut rng = SequenceRng::new(vec![1]);
        assert_eq!(add_random_tile(&mut grid, &mut rng), None);
        assert_eq!(rng.draws(), 0);
        assert_eq!(grid, [[2; GRID_SIZE]; GRID_SIZE]);
    }

    #[test]
    fn test_new_board_has_two_tiles() {
        for seed in 1..20 {
            let board = Board2048::new(SimpleRng::new(seed));
            assert_eq!(non_zero(board.grid()), INITIAL_TILES);
            assert!(board
                .grid()
                .iter()
                .flatten()
                .all(|&v| v == 0 || v == 2 || v == 4));
            assert!(!board.is_terminal());
        }
    }

    #[test]
    fn test_move_spawns_exactly_one_tile() {
        let grid: Grid = [
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ];
        let mut board = Board2048::from_grid(grid, SequenceRng::new(vec![0, 5]));
        let outcome = board.move_tiles(Direction::Right);

        assert!(outcome.changed);
        assert!(!outcome.terminal);
        assert_eq!(outcome.grid[0][3], 2);
        // First empty cell after the slide is (0, 0).
        assert_eq!(outcome.grid[0][0], 2);
        assert_eq!(non_zero(&outcome.grid), 2);
        assert_eq!(board.moves(), 1);
    }

    #[test]
    fn test_noop_move_is_not_committed() {
        let grid: Grid = [
            [2, 4, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ];
        let mut board = Board2048::from_grid(grid, SequenceRng::new(vec![0]));
        let outcome = board.move_tiles(Direction::Left);

        assert!(!outcome.changed);
        assert_eq!(outcome.grid, grid);
        assert_eq!(board.moves(), 0);
    }

    #[test]
    fn test_move_into_terminal() {
        let grid: Grid = [
            [4, 8, 4, 0],
            [8, 4, 8, 4],
            [4, 8, 4, 8],
            [8, 4, 8, 4],
        ];
        // Only (0, 0) is free after sliding right; roll 0 spawns a 4 there.
        let mut board = Board2048::from_grid(grid, SequenceRng::new(vec![0, 0]));
        let outcome = board.move_tiles(Direction::Right);
        assert!(outcome.changed);
        assert_eq!(outcome.grid[0], [4, 4, 8, 4]);
        assert!(!outcome.terminal);

        let grid: Grid = [
            [2, 4, 2, 0],
            [8, 4, 8, 4],
            [4, 8, 4, 8],
            [8, 4, 8, 4],
        ];
        let mut board = Board2048::from_grid(grid, SequenceRng::new(vec![0, 0]));
        let outcome = board.move_tiles(Direction::Right);
        assert_eq!(outcome.grid[0], [4, 2, 4, 2]);
        assert!(outcome.terminal);
        assert!(board.is_terminal());
    }

    #[test]
    fn test_reset_restores_fresh_board() {
        let mut board = Board2048::new(SimpleRng::new(3));
        for d in Direction::ALL {
            board.move_tiles(d);
        }
        board.reset();
        assert_eq!(non_zero(board.grid()), INITIAL_TILES);
        assert_eq!(board.moves(), 0);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let grid: Grid = [
            [2, 0, 0, 0],
            [0, 64, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 8],
        ];
        let board = Board2048::from_grid(grid, SequenceRng::new(vec![0]));
        let snap = board.snapshot();
        assert_eq!(snap.grid, grid);
        assert_eq!(snap.max_tile, 64);
        assert!(!snap.terminal);
    }
}
