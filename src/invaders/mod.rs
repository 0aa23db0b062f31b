//! Space Invaders.
//!
//! A [`Session`] owns every entity. Each tick runs the sub-systems in a fixed
//! order: formation step, animation, enemy fire, UFO, bullets, collisions,
//! bookkeeping.

pub mod collision;
pub mod entities;
pub mod fire;
pub mod formation;
pub mod projectiles;
pub mod session;
pub mod shields;
pub mod ufo;

pub use entities::{Alien, AlienGrid, Bullet, BulletOwner};
pub use formation::{Formation, StepOutcome};
pub use projectiles::Projectiles;
pub use session::{Command, Session};
pub use shields::Shield;
pub use ufo::Ufo;

// ── Playfield (character cells) ──────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 80;
pub const SCREEN_HEIGHT: i32 = 30;

pub const GAME_LEFT: i32 = 2;
pub const GAME_RIGHT: i32 = SCREEN_WIDTH - 3;
pub const GAME_TOP: i32 = 3;
pub const GAME_BOTTOM: i32 = SCREEN_HEIGHT - 3;

// ── Wave layout ──────────────────────────────────────────────────────────────

pub const ALIEN_ROWS: usize = 5;
pub const ALIEN_COLS: usize = 10;
pub const ALIEN_START_Y: i32 = 5;
pub const ALIEN_SPACING_X: i32 = 4;
pub const ALIEN_SPACING_Y: i32 = 2;

pub const PLAYER_Y: i32 = GAME_BOTTOM - 2;
pub const PLAYER_START_X: i32 = SCREEN_WIDTH / 2;

pub const SHIELD_COUNT: usize = 4;
pub const SHIELD_WIDTH: usize = 5;
pub const SHIELD_HEIGHT: usize = 2;
pub const SHIELD_Y: i32 = PLAYER_Y - 4;
/// Health of a fresh shield cell (also the densest glyph).
pub const SHIELD_CELL_HEALTH: u8 = 3;

pub const UFO_SCORE_MIN: u32 = 50;
pub const UFO_SCORE_MAX: u32 = 300;

/// Kill reward by alien category (= wave row).
pub fn alien_score(category: u8) -> u32 {
    match category {
        0 => 30,
        1 | 2 => 20,
        _ => 10,
    }
}
