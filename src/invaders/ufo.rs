//! The roaming bonus ship.

use rand::Rng;

use super::{GAME_LEFT, GAME_RIGHT, GAME_TOP, UFO_SCORE_MAX, UFO_SCORE_MIN};

#[derive(Clone, Debug)]
pub struct Ufo {
    pub x: i32,
    pub y: i32,
    pub direction: i32,
    pub active: bool,
    pub reward: u32,
    min_delay: f32,
    chance: f64,
    spawn_timer: f32,
}

impl Ufo {
    pub fn new(min_delay: f32, chance: f64) -> Self {
        Self {
            x: 0,
            y: GAME_TOP,
            direction: 1,
            active: false,
            reward: 0,
            min_delay,
            chance,
            spawn_timer: 0.0,
        }
    }

    /// Deactivate and restart the spawn clock.
    pub fn reset(&mut self) {
        self.active = false;
        self.spawn_timer = 0.0;
    }

    /// While inactive, roll for a spawn once `min_delay` has passed.
    /// Returns `true` when the UFO spawned this call.
    pub fn maybe_spawn<R: Rng>(&mut self, dt: f32, rng: &mut R) -> bool {
        if self.active {
            return false;
        }
        self.spawn_timer += dt;
        if self.spawn_timer < self.min_delay || !rng.gen_bool(self.chance) {
            return false;
        }
        let direction = if rng.gen_bool(0.5) { 1 } else { -1 };
        let reward = rng.gen_range(UFO_SCORE_MIN..=UFO_SCORE_MAX);
        self.launch(direction, reward);
        self.spawn_timer = 0.0;
        tracing::debug!(direction, reward, "ufo spawned");
        true
    }

    /// Enter from the edge matching `direction`.
    pub fn launch(&mut self, direction: i32, reward: u32) {
        self.active = true;
        self.direction = direction.signum();
        self.x = if self.direction > 0 { GAME_LEFT } else { GAME_RIGHT };
        self.reward = reward;
    }

    /// One column per tick; gone as soon as it leaves the playfield.
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }
        self.x += self.direction;
        if self.x < GAME_LEFT || self.x > GAME_RIGHT {
            self.active = false;
        }
    }

    pub fn glyph(&self) -> &'static str {
        "<-UFO->"
    }
}
