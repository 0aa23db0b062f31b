use std::io::Write;

use crossterm::style::Color;
use terminal_arcade::pong::{
    Pong, Side, HEIGHT, LEFT_PADDLE_X, PADDLE_HEIGHT, RIGHT_PADDLE_X, WIDTH,
};

use super::{banner, draw_box, hint, put, put_bold, Frame};

const C_LEFT: Color = Color::Cyan;
const C_RIGHT: Color = Color::Magenta;
const C_NET: Color = Color::DarkGrey;
const C_BALL: Color = Color::White;

pub fn render<W: Write>(out: &mut W, game: &Pong) -> std::io::Result<()> {
    super::begin(out)?;
    draw_box(out, 0, 0, WIDTH, HEIGHT, Frame::Double)?;

    for y in (1..HEIGHT - 1).step_by(2) {
        put(out, WIDTH / 2, y, '┊', C_NET)?;
    }

    put_bold(out, WIDTH / 2 - 6, 2, game.left_score, C_LEFT)?;
    put_bold(out, WIDTH / 2 + 5, 2, game.right_score, C_RIGHT)?;

    for dy in 0..PADDLE_HEIGHT {
        put(out, LEFT_PADDLE_X, game.left_y + dy, '█', C_LEFT)?;
        put(out, RIGHT_PADDLE_X, game.right_y + dy, '█', C_RIGHT)?;
    }

    if game.winner.is_none() {
        put(out, game.ball.x as i32, game.ball.y as i32, '●', C_BALL)?;
    }

    hint(
        out,
        WIDTH,
        HEIGHT,
        &format!("W/S Left | ↑/↓ Right | SPACE Pause | Q Quit | first to {}", game.winning_score()),
    )?;

    if let Some(side) = game.winner {
        let (line, color) = match side {
            Side::Left => ("LEFT PLAYER WINS!", C_LEFT),
            Side::Right => ("RIGHT PLAYER WINS!", C_RIGHT),
        };
        banner(
            out,
            WIDTH,
            HEIGHT / 2,
            &[(line, color), ("R - Rematch  Q - Quit", Color::White)],
        )?;
    } else if game.paused {
        banner(out, WIDTH, HEIGHT / 2, &[("PAUSED", Color::White)])?;
    }

    super::finish(out, HEIGHT as u16 + 1)
}
