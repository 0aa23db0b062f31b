//! Rigid-body movement of the alien wave.

use super::entities::AlienGrid;
use super::{GAME_LEFT, GAME_RIGHT, PLAYER_Y};

/// What a call to [`Formation::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step timer has not elapsed yet.
    Idle,
    Shifted,
    /// Edge contact: direction flipped and every alien dropped one row.
    Dropped { reached_player: bool },
}

#[derive(Clone, Debug)]
pub struct Formation {
    /// +1 moving right, -1 moving left.
    pub direction: i32,
    /// Current seconds between steps.
    pub cadence: f32,
    base_cadence: f32,
    min_cadence: f32,
    move_timer: f32,
    animation_interval: f32,
    animation_timer: f32,
}

impl Formation {
    pub fn new(base_cadence: f32, min_cadence: f32, animation_interval: f32) -> Self {
        Self {
            direction: 1,
            cadence: base_cadence,
            base_cadence,
            min_cadence,
            move_timer: 0.0,
            animation_interval,
            animation_timer: 0.0,
        }
    }

    pub fn base_cadence(&self) -> f32 {
        self.base_cadence
    }

    pub fn min_cadence(&self) -> f32 {
        self.min_cadence
    }

    /// Back to the start-of-wave direction, cadence and timers.
    pub fn reset(&mut self) {
        self.direction = 1;
        self.cadence = self.base_cadence;
        self.move_timer = 0.0;
        self.animation_timer = 0.0;
    }

    /// Accumulate `dt` and take at most one step.
    pub fn advance(&mut self, grid: &mut AlienGrid, dt: f32) -> StepOutcome {
        self.move_timer += dt;
        if self.move_timer < self.cadence {
            return StepOutcome::Idle;
        }
        self.move_timer = 0.0;

        let outcome = self.step(grid);
        self.recompute_cadence(grid);
        outcome
    }

    /// Move the whole wave once, ignoring the timer.
    pub fn step(&mut self, grid: &mut AlienGrid) -> StepOutcome {
        let dir = self.direction;
        let hit_edge = grid.alive().any(|a| {
            let next_x = a.x + dir;
            next_x < GAME_LEFT || next_x > GAME_RIGHT
        });

        if hit_edge {
            self.direction = -dir;
            let mut reached_player = false;
            for alien in grid.alive_mut() {
                alien.y += 1;
                reached_player |= alien.y >= PLAYER_Y;
            }
            StepOutcome::Dropped { reached_player }
        } else {
            for alien in grid.alive_mut() {
                alien.x += dir;
            }
            StepOutcome::Shifted
        }
    }

    /// The wave speeds up as it thins out, never faster than `min_cadence`.
    fn recompute_cadence(&mut self, grid: &AlienGrid) {
        let alive = grid.alive_count();
        if alive == 0 {
            return;
        }
        let ratio = alive as f32 / grid.total() as f32;
        self.cadence = (self.base_cadence * ratio).max(self.min_cadence);
    }

    /// Flip every alive alien's sprite on a fixed interval, independent of
    /// movement.
    pub fn animate(&mut self, grid: &mut AlienGrid, dt: f32) {
        self.animation_timer += dt;
        if self.animation_timer >= self.animation_interval {
            self.animation_timer = 0.0;
            for alien in grid.alive_mut() {
                alien.alt_frame = !alien.alt_frame;
            }
        }
    }
}
