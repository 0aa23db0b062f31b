//! 2048 on a 4 × 4 board.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::{Flow, Game, Key};

pub const SIZE: usize = 4;
pub const WINNING_TILE: u32 = 2048;

pub type Board = [[u32; SIZE]; SIZE];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Slide one line toward index 0, merging each equal pair once.
/// Returns the new line and the points earned.
pub fn slide_line(line: [u32; SIZE]) -> ([u32; SIZE], u32) {
    let tiles: Vec<u32> = line.into_iter().filter(|&v| v != 0).collect();
    let mut out = [0; SIZE];
    let mut gained = 0;
    let mut i = 0;
    let mut slot = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            out[slot] = tiles[i] * 2;
            gained += out[slot];
            i += 2;
        } else {
            out[slot] = tiles[i];
            i += 1;
        }
        slot += 1;
    }
    (out, gained)
}

/// Board coordinates of line `index`, ordered from the edge tiles move toward.
fn line_cells(direction: Direction, index: usize) -> [(usize, usize); SIZE] {
    std::array::from_fn(|k| match direction {
        Direction::Left => (index, k),
        Direction::Right => (index, SIZE - 1 - k),
        Direction::Up => (k, index),
        Direction::Down => (SIZE - 1 - k, index),
    })
}

/// Apply a move to `board`. Returns whether anything moved and the points
/// earned.
pub fn shift(board: &mut Board, direction: Direction) -> (bool, u32) {
    let mut moved = false;
    let mut gained = 0;
    for index in 0..SIZE {
        let cells = line_cells(direction, index);
        let line = cells.map(|(r, c)| board[r][c]);
        let (slid, points) = slide_line(line);
        if slid != line {
            moved = true;
        }
        gained += points;
        for ((r, c), value) in cells.into_iter().zip(slid) {
            board[r][c] = value;
        }
    }
    (moved, gained)
}

pub fn can_move(board: &Board) -> bool {
    for r in 0..SIZE {
        for c in 0..SIZE {
            let v = board[r][c];
            if v == 0 {
                return true;
            }
            if c + 1 < SIZE && board[r][c + 1] == v {
                return true;
            }
            if r + 1 < SIZE && board[r + 1][c] == v {
                return true;
            }
        }
    }
    false
}

#[derive(Clone, Debug)]
pub struct Game2048 {
    pub board: Board,
    pub score: u32,
    pub best_score: u32,
    pub won: bool,
    pub keep_playing: bool,
    pub game_over: bool,
    /// Moves are applied in `update` so the tile spawn can use the injected RNG.
    pending: Vec<Direction>,
    restart_requested: bool,
}

impl Game2048 {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut game = Self::empty();
        game.spawn_tile(rng);
        game.spawn_tile(rng);
        game
    }

    /// A board with no tiles; mostly useful for tests.
    pub fn empty() -> Self {
        Self {
            board: [[0; SIZE]; SIZE],
            score: 0,
            best_score: 0,
            won: false,
            keep_playing: false,
            game_over: false,
            pending: Vec::new(),
            restart_requested: false,
        }
    }

    /// Put a 2 (90%) or a 4 on a random empty cell.
    pub fn spawn_tile<R: Rng>(&mut self, rng: &mut R) -> bool {
        let empty: Vec<(usize, usize)> = (0..SIZE)
            .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| self.board[r][c] == 0)
            .collect();
        let Some(&(r, c)) = empty.choose(rng) else {
            return false;
        };
        self.board[r][c] = if rng.gen_bool(0.9) { 2 } else { 4 };
        true
    }

    /// Waiting on the "you won" banner.
    pub fn awaiting_continue(&self) -> bool {
        self.won && !self.keep_playing
    }

    /// Apply a move, spawning a tile only when the board changed.
    pub fn play<R: Rng>(&mut self, direction: Direction, rng: &mut R) -> bool {
        if self.game_over || self.awaiting_continue() {
            return false;
        }
        let (moved, gained) = shift(&mut self.board, direction);
        if !moved {
            return false;
        }
        self.score += gained;
        self.best_score = self.best_score.max(self.score);
        self.spawn_tile(rng);

        if !self.won && self.board.iter().flatten().any(|&v| v >= WINNING_TILE) {
            self.won = true;
            tracing::info!(score = self.score, "2048: reached {WINNING_TILE}");
        }
        if !can_move(&self.board) {
            self.game_over = true;
            tracing::info!(score = self.score, "2048: no moves left");
        }
        true
    }

    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        let best = self.best_score;
        *self = Self::new(rng);
        self.best_score = best;
    }
}

impl Game for Game2048 {
    fn title(&self) -> &'static str {
        "2048"
    }

    fn handle_key(&mut self, key: Key) -> Flow {
        if key == Key::Esc || key.is_char('q') {
            return Flow::Exit;
        }
        if key.is_char('r') {
            self.restart_requested = true;
            return Flow::Continue;
        }
        if self.awaiting_continue() {
            if key.is_char('c') {
                self.keep_playing = true;
            }
            return Flow::Continue;
        }
        let direction = match key {
            Key::Up => Direction::Up,
            Key::Down => Direction::Down,
            Key::Left => Direction::Left,
            Key::Right => Direction::Right,
            _ => return Flow::Continue,
        };
        self.pending.push(direction);
        Flow::Continue
    }

    fn update<R: Rng>(&mut self, _dt: f32, rng: &mut R) {
        if std::mem::take(&mut self.restart_requested) {
            self.restart(rng);
            return;
        }
        for direction in std::mem::take(&mut self.pending) {
            self.play(direction, rng);
        }
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn is_over(&self) -> bool {
        self.game_over
    }
}
