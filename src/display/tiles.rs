use std::io::Write;

use crossterm::style::Color;
use terminal_arcade::game2048::{Game2048, SIZE, WINNING_TILE};

use super::{banner, draw_box, hint, put, put_bold, text, Frame};

const CELL_WIDTH: i32 = 7;
const CELL_HEIGHT: i32 = 3;
const ORIGIN_X: i32 = 2;
const ORIGIN_Y: i32 = 3;

const BOARD_WIDTH: i32 = SIZE as i32 * CELL_WIDTH + 2;
const BOARD_HEIGHT: i32 = SIZE as i32 * CELL_HEIGHT + 2;
const SCREEN_WIDTH: i32 = BOARD_WIDTH + 2 * ORIGIN_X;

fn tile_color(value: u32) -> Color {
    match value {
        2 => Color::White,
        4 => Color::Grey,
        8 => Color::Yellow,
        16 => Color::DarkYellow,
        32 => Color::Red,
        64 => Color::DarkRed,
        128 | 256 => Color::Green,
        512 | 1024 => Color::Cyan,
        _ => Color::Magenta,
    }
}

pub fn render<W: Write>(out: &mut W, game: &Game2048) -> std::io::Result<()> {
    super::begin(out)?;

    put_bold(out, ORIGIN_X, 0, "2048", Color::Yellow)?;
    text(out, ORIGIN_X, 1, format!("SCORE: {}   BEST: {}", game.score, game.best_score))?;

    draw_box(out, ORIGIN_X, ORIGIN_Y, BOARD_WIDTH, BOARD_HEIGHT, Frame::Light)?;
    for (r, row) in game.board.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            let x = ORIGIN_X + 1 + c as i32 * CELL_WIDTH;
            let y = ORIGIN_Y + 1 + r as i32 * CELL_HEIGHT + CELL_HEIGHT / 2;
            if value == 0 {
                put(out, x + CELL_WIDTH / 2, y, '·', Color::DarkGrey)?;
            } else {
                let label = format!("{:^width$}", value, width = CELL_WIDTH as usize);
                put_bold(out, x, y, label, tile_color(value))?;
            }
        }
    }

    let footer = ORIGIN_Y + BOARD_HEIGHT + 1;
    hint(out, SCREEN_WIDTH, footer, "Arrows Move | R Restart | Q Quit")?;

    let centre = ORIGIN_Y + BOARD_HEIGHT / 2;
    if game.awaiting_continue() {
        let headline = format!("{WINNING_TILE}!");
        banner(
            out,
            SCREEN_WIDTH,
            centre,
            &[
                (headline.as_str(), Color::Yellow),
                ("C - Keep going  R - Restart", Color::White),
            ],
        )?;
    } else if game.game_over {
        banner(
            out,
            SCREEN_WIDTH,
            centre,
            &[("NO MOVES LEFT", Color::Red), ("R - Restart  Q - Quit", Color::White)],
        )?;
    }

    super::finish(out, footer as u16 + 1)
}
