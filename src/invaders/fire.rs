//! Enemy fire: once per interval, maybe one shot from a front-line alien.

use rand::seq::SliceRandom;
use rand::Rng;

use super::entities::{AlienGrid, Bullet, BulletOwner};

#[derive(Clone, Debug)]
pub struct EnemyFire {
    interval: f32,
    chance: f64,
    timer: f32,
}

impl EnemyFire {
    pub fn new(interval: f32, chance: f64) -> Self {
        Self {
            interval,
            chance,
            timer: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    /// Returns the new enemy bullet, if the roll succeeded.
    pub fn maybe_fire<R: Rng>(
        &mut self,
        grid: &AlienGrid,
        dt: f32,
        rng: &mut R,
    ) -> Option<Bullet> {
        self.timer += dt;
        if self.timer < self.interval {
            return None;
        }
        self.timer = 0.0;

        let front = grid.front_aliens();
        if front.is_empty() || !rng.gen_bool(self.chance) {
            return None;
        }
        let shooter = front.choose(rng)?;
        tracing::trace!(x = shooter.x, y = shooter.y, "enemy fire");
        // Sprites are 3 cells wide; shoot from the middle one.
        Some(Bullet::new(shooter.x + 1, shooter.y + 1, BulletOwner::Enemy))
    }
}
