use std::io::Write;

use crossterm::style::Color;
use terminal_arcade::breakout::{Breakout, Status, BRICK_WIDTH, HEIGHT, PADDLE_WIDTH, PADDLE_Y, WIDTH};

use super::{banner, draw_box, hint, put, text, Frame};

// ── Colour palette ────────────────────────────────────────────────────────────

/// One colour per brick row, top to bottom.
const ROW_COLORS: [Color; 5] = [
    Color::Red,
    Color::DarkYellow,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
];
const C_PADDLE: Color = Color::White;
const C_BALL: Color = Color::White;

pub fn render<W: Write>(out: &mut W, game: &Breakout) -> std::io::Result<()> {
    super::begin(out)?;
    draw_box(out, 0, 0, WIDTH, HEIGHT, Frame::Light)?;

    text(out, 2, 0, format!(" SCORE: {} ", game.score))?;
    text(out, 22, 0, format!(" LIVES: {} ", game.lives))?;
    text(out, 38, 0, format!(" HI: {} ", game.high_score))?;

    let brick = "█".repeat(BRICK_WIDTH as usize);
    for b in game.bricks.iter().filter(|b| b.active) {
        let color = ROW_COLORS[b.row % ROW_COLORS.len()];
        put(out, b.x, b.y, &brick, color)?;
    }

    put(out, game.paddle_x, PADDLE_Y, "═".repeat(PADDLE_WIDTH as usize), C_PADDLE)?;

    if game.status == Status::Playing {
        let (x, y) = game.ball.cell();
        put(out, x, y, '●', C_BALL)?;
    }

    hint(out, WIDTH, HEIGHT, "← → Move | P Pause | Q Quit")?;

    match game.status {
        Status::Won => banner(
            out,
            WIDTH,
            HEIGHT / 2,
            &[("YOU WIN!", Color::Green), ("R - Play Again  Q - Quit", Color::White)],
        )?,
        Status::Lost => banner(
            out,
            WIDTH,
            HEIGHT / 2,
            &[("GAME OVER", Color::Red), ("R - Play Again  Q - Quit", Color::White)],
        )?,
        Status::Playing if game.paused => {
            banner(out, WIDTH, HEIGHT / 2, &[("PAUSED", Color::White)])?
        }
        Status::Playing => {}
    }

    super::finish(out, HEIGHT as u16 + 1)
}
