//! Alien grid and bullets — plain data plus the queries the sub-systems share.

use super::{
    alien_score, ALIEN_COLS, ALIEN_ROWS, ALIEN_SPACING_X, ALIEN_SPACING_Y, ALIEN_START_Y,
    SCREEN_WIDTH,
};

// ── Aliens ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    /// Left column of the 3-cell sprite.
    pub x: i32,
    pub y: i32,
    /// 0 (top row) to 4 (bottom row).
    pub category: u8,
    pub alive: bool,
    /// Animation parity, flipped by the formation's animation timer.
    pub alt_frame: bool,
}

impl Alien {
    pub fn new(x: i32, y: i32, category: u8) -> Self {
        Self {
            x,
            y,
            category,
            alive: true,
            alt_frame: false,
        }
    }

    pub fn score(&self) -> u32 {
        alien_score(self.category)
    }

    pub fn glyph(&self) -> &'static str {
        let [a, b] = match self.category {
            0 => ["<o>", "<O>"],
            1 => ["/M\\", "\\M/"],
            2 => ["/W\\", "\\W/"],
            3 => [")o(", "(o)"],
            _ => [">o<", "<o>"],
        };
        if self.alt_frame {
            b
        } else {
            a
        }
    }
}

/// Fixed `ALIEN_ROWS × ALIEN_COLS` wave stored row-major. Dead aliens stay in
/// place so `(row, col)` indexing is stable for the whole wave.
#[derive(Clone, Debug)]
pub struct AlienGrid {
    aliens: Vec<Alien>,
}

impl AlienGrid {
    /// A full wave, horizontally centred on the screen.
    pub fn full_wave() -> Self {
        let start_x = (SCREEN_WIDTH - ALIEN_COLS as i32 * ALIEN_SPACING_X) / 2;
        let mut aliens = Vec::with_capacity(ALIEN_ROWS * ALIEN_COLS);
        for row in 0..ALIEN_ROWS {
            for col in 0..ALIEN_COLS {
                aliens.push(Alien::new(
                    start_x + col as i32 * ALIEN_SPACING_X,
                    ALIEN_START_Y + row as i32 * ALIEN_SPACING_Y,
                    row as u8,
                ));
            }
        }
        Self { aliens }
    }

    pub fn total(&self) -> usize {
        self.aliens.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Alien> {
        if row < ALIEN_ROWS && col < ALIEN_COLS {
            self.aliens.get(row * ALIEN_COLS + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Alien> {
        if row < ALIEN_ROWS && col < ALIEN_COLS {
            self.aliens.get_mut(row * ALIEN_COLS + col)
        } else {
            None
        }
    }

    /// Every slot, dead or alive, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter().filter(|a| a.alive)
    }

    pub fn alive_mut(&mut self) -> impl Iterator<Item = &mut Alien> {
        self.aliens.iter_mut().filter(|a| a.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// Per column, the alive alien closest to the player. Empty columns are
    /// skipped.
    pub fn front_aliens(&self) -> Vec<&Alien> {
        (0..ALIEN_COLS)
            .filter_map(|col| {
                (0..ALIEN_ROWS)
                    .rev()
                    .filter_map(|row| self.get(row, col))
                    .find(|a| a.alive)
            })
            .collect()
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

impl BulletOwner {
    /// Rows travelled per tick: player shots go up, enemy shots come down.
    pub fn direction(self) -> i32 {
        match self {
            BulletOwner::Player => -1,
            BulletOwner::Enemy => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub owner: BulletOwner,
    active: bool,
}

impl Bullet {
    pub fn new(x: i32, y: i32, owner: BulletOwner) -> Self {
        Self {
            x,
            y,
            owner,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// One-way: there is no way to re-activate a bullet.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn glyph(&self) -> char {
        match self.owner {
            BulletOwner::Player => '|',
            BulletOwner::Enemy => '!',
        }
    }
}
