use std::io::Write;

use crossterm::style::Color;
use terminal_arcade::invaders::{Session, PLAYER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};

use super::{banner, draw_box, hint, put, text, Frame};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::Green;
const C_ALIEN: Color = Color::Red;
const C_BULLET: Color = Color::Yellow;
const C_SHIELD: Color = Color::Cyan;
const C_UFO: Color = Color::Magenta;

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, s: &Session) -> std::io::Result<()> {
    super::begin(out)?;
    draw_box(out, 0, 0, SCREEN_WIDTH, SCREEN_HEIGHT, Frame::Light)?;
    draw_hud(out, s)?;

    for alien in s.aliens.alive() {
        put(out, alien.x, alien.y, alien.glyph(), C_ALIEN)?;
    }

    if s.ufo.active {
        // Clip the sprite at the right wall.
        let room = (SCREEN_WIDTH - 1 - s.ufo.x).max(0) as usize;
        let sprite: String = s.ufo.glyph().chars().take(room).collect();
        put(out, s.ufo.x, s.ufo.y, sprite, C_UFO)?;
    }

    for shield in &s.shields {
        for (x, y, glyph) in shield.visible_cells() {
            put(out, x, y, glyph, C_SHIELD)?;
        }
    }

    for bullet in s.projectiles.player.iter().chain(&s.projectiles.enemy) {
        put(out, bullet.x, bullet.y, bullet.glyph(), C_BULLET)?;
    }

    if !s.game_over {
        put(out, s.player_x, PLAYER_Y, '▲', C_PLAYER)?;
    }

    hint(
        out,
        SCREEN_WIDTH,
        SCREEN_HEIGHT - 2,
        "← → Move | SPACE Shoot | P Pause | Q Quit",
    )?;

    if s.game_over {
        banner(
            out,
            SCREEN_WIDTH,
            SCREEN_HEIGHT / 2,
            &[
                ("GAME OVER!", C_ALIEN),
                ("R - Play Again  Q - Quit", Color::White),
            ],
        )?;
    } else if s.paused {
        banner(
            out,
            SCREEN_WIDTH,
            SCREEN_HEIGHT / 2,
            &[("PAUSED - Press P to continue", Color::White)],
        )?;
    }

    super::finish(out, SCREEN_HEIGHT as u16)
}

fn draw_hud<W: Write>(out: &mut W, s: &Session) -> std::io::Result<()> {
    text(out, 3, 1, format!("SCORE: {:05}", s.score))?;
    put(out, 25, 1, format!("LIVES: {}", "❤".repeat(s.lives as usize)), C_PLAYER)?;
    text(out, 45, 1, format!("HI: {:05}", s.high_score))?;
    text(out, 60, 1, format!("LEVEL: {}", s.level))?;
    Ok(())
}
