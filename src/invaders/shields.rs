//! Destructible shields.

use super::{
    GAME_LEFT, GAME_RIGHT, SHIELD_CELL_HEALTH, SHIELD_COUNT, SHIELD_HEIGHT, SHIELD_WIDTH, SHIELD_Y,
};

const DENSITY: [char; 4] = [' ', '░', '▒', '▓'];

#[derive(Clone, Debug, PartialEq)]
pub struct Shield {
    pub x: i32,
    pub y: i32,
    cells: [[u8; SHIELD_WIDTH]; SHIELD_HEIGHT],
}

impl Shield {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            cells: [[SHIELD_CELL_HEALTH; SHIELD_WIDTH]; SHIELD_HEIGHT],
        }
    }

    /// The wave's four shields, evenly spaced across the playfield.
    pub fn row() -> Vec<Shield> {
        let spacing = (GAME_RIGHT - GAME_LEFT) / (SHIELD_COUNT as i32 + 1);
        (0..SHIELD_COUNT as i32)
            .map(|i| {
                let x = GAME_LEFT + spacing * (i + 1) - SHIELD_WIDTH as i32 / 2;
                Shield::new(x, SHIELD_Y)
            })
            .collect()
    }

    fn local(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x - self.x).ok()?;
        let row = usize::try_from(y - self.y).ok()?;
        (col < SHIELD_WIDTH && row < SHIELD_HEIGHT).then_some((row, col))
    }

    pub fn covers_row(&self, y: i32) -> bool {
        y >= self.y && y < self.y + SHIELD_HEIGHT as i32
    }

    /// Health of the cell at screen position `(x, y)`, if it belongs to this
    /// shield.
    pub fn health_at(&self, x: i32, y: i32) -> Option<u8> {
        self.local(x, y).map(|(row, col)| self.cells[row][col])
    }

    /// Absorb a bullet at `(x, y)`. Returns `false` when the position is
    /// outside the shield or the cell is already destroyed.
    pub fn absorb(&mut self, x: i32, y: i32) -> bool {
        let Some((row, col)) = self.local(x, y) else {
            return false;
        };
        let cell = &mut self.cells[row][col];
        if *cell == 0 {
            return false;
        }
        *cell -= 1;
        true
    }

    /// `(x, y, glyph)` for every cell still standing.
    pub fn visible_cells(&self) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(row, cells)| {
            cells.iter().enumerate().filter(|&(_, &h)| h > 0).map(move |(col, &h)| {
                (
                    self.x + col as i32,
                    self.y + row as i32,
                    DENSITY[h.min(SHIELD_CELL_HEALTH) as usize],
                )
            })
        })
    }
}
