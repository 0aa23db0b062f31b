//! Per-tick collision resolution.
//!
//! Checks run in a fixed order and every bullet matches at most once: it is
//! deactivated on its first hit and skipped by every later check. Hit boxes
//! are integer tolerances on the character grid.

use super::entities::{AlienGrid, Bullet};
use super::projectiles::Projectiles;
use super::shields::Shield;
use super::ufo::Ufo;
use super::PLAYER_Y;

/// Horizontal reach of an alien sprite around its anchor column.
const ALIEN_REACH: i32 = 1;
/// Half-width of the UFO sprite.
const UFO_REACH: i32 = 3;
const PLAYER_REACH: i32 = 1;

/// Mutations for the session to apply after a pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    pub score: u32,
    pub lives_lost: u32,
    /// The last alien of the wave died; later checks were skipped.
    pub wave_cleared: bool,
}

/// Run every check in order and prune spent bullets.
pub fn resolve(
    projectiles: &mut Projectiles,
    grid: &mut AlienGrid,
    ufo: &mut Ufo,
    shields: &mut [Shield],
    player_x: i32,
) -> Resolution {
    let mut res = Resolution::default();

    let (score, cleared) = player_bullets_vs_aliens(&mut projectiles.player, grid);
    res.score += score;
    if cleared {
        // The next wave starts with empty bullet lists and no UFO.
        res.wave_cleared = true;
        return res;
    }

    res.score += player_bullets_vs_ufo(&mut projectiles.player, ufo);
    res.lives_lost += enemy_bullets_vs_player(&mut projectiles.enemy, player_x);
    bullets_vs_shields(
        projectiles.player.iter_mut().chain(projectiles.enemy.iter_mut()),
        shields,
    );

    projectiles.prune();
    res
}

/// Returns the score earned and whether the wave is now empty.
pub fn player_bullets_vs_aliens(bullets: &mut [Bullet], grid: &mut AlienGrid) -> (u32, bool) {
    let mut score = 0;
    for bullet in bullets.iter_mut().filter(|b| b.is_active()) {
        let Some(alien) = grid
            .alive_mut()
            .find(|a| a.y == bullet.y && (a.x - bullet.x).abs() <= ALIEN_REACH)
        else {
            continue;
        };
        alien.alive = false;
        bullet.deactivate();
        score += alien.score();
        if grid.alive_count() == 0 {
            return (score, true);
        }
    }
    (score, false)
}

pub fn player_bullets_vs_ufo(bullets: &mut [Bullet], ufo: &mut Ufo) -> u32 {
    let mut score = 0;
    for bullet in bullets.iter_mut().filter(|b| b.is_active()) {
        if ufo.active && ufo.y == bullet.y && (ufo.x - bullet.x).abs() <= UFO_REACH {
            ufo.active = false;
            bullet.deactivate();
            score += ufo.reward;
        }
    }
    score
}

/// Returns how many bullets hit the player.
pub fn enemy_bullets_vs_player(bullets: &mut [Bullet], player_x: i32) -> u32 {
    let mut hits = 0;
    for bullet in bullets.iter_mut().filter(|b| b.is_active()) {
        if bullet.y == PLAYER_Y && (bullet.x - player_x).abs() <= PLAYER_REACH {
            bullet.deactivate();
            hits += 1;
        }
    }
    hits
}

pub fn bullets_vs_shields<'a>(
    bullets: impl Iterator<Item = &'a mut Bullet>,
    shields: &mut [Shield],
) {
    for bullet in bullets.filter(|b| b.is_active()) {
        let absorbed = shields
            .iter_mut()
            .filter(|s| s.covers_row(bullet.y))
            .any(|s| s.absorb(bullet.x, bullet.y));
        if absorbed {
            bullet.deactivate();
        }
    }
}
