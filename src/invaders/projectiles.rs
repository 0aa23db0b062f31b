//! Player and enemy bullet collections.

use super::entities::{Bullet, BulletOwner};
use super::{GAME_BOTTOM, GAME_TOP};

/// The two collections are never merged; collision checks walk both.
#[derive(Clone, Debug, Default)]
pub struct Projectiles {
    pub player: Vec<Bullet>,
    pub enemy: Vec<Bullet>,
}

impl Projectiles {
    pub fn clear(&mut self) {
        self.player.clear();
        self.enemy.clear();
    }

    /// Only one player shot may be in flight.
    pub fn fire_player(&mut self, x: i32, y: i32) -> bool {
        if self.player.iter().any(Bullet::is_active) {
            return false;
        }
        self.player.push(Bullet::new(x, y, BulletOwner::Player));
        true
    }

    pub fn push_enemy(&mut self, bullet: Bullet) {
        self.enemy.push(bullet);
    }

    /// Move every bullet one row; bullets leaving the playfield deactivate.
    pub fn advance_all(&mut self) {
        for bullet in self.player.iter_mut().chain(self.enemy.iter_mut()) {
            if !bullet.is_active() {
                continue;
            }
            bullet.y += bullet.owner.direction();
            if bullet.y < GAME_TOP || bullet.y > GAME_BOTTOM {
                bullet.deactivate();
            }
        }
    }

    /// Rebuild both collections with only the active bullets.
    pub fn prune(&mut self) {
        self.player.retain(Bullet::is_active);
        self.enemy.retain(Bullet::is_active);
    }

    pub fn active_player_count(&self) -> usize {
        self.player.iter().filter(|b| b.is_active()).count()
    }
}
