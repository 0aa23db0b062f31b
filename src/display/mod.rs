//! Rendering layer — all terminal I/O lives here.
//!
//! Each game gets a `render` function that receives a mutable writer and an
//! immutable view of the game. No game logic is performed; this module only
//! translates state into queued crossterm commands.

pub mod breakout;
pub mod invaders;
pub mod menu;
pub mod pong;
pub mod tiles;

use std::fmt::Display;
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};

// ── Shared palette ───────────────────────────────────────────────────────────

const C_BORDER: Color = Color::White;
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Box-drawing character sets.
#[derive(Clone, Copy)]
pub enum Frame {
    Light,
    Double,
}

impl Frame {
    fn chars(self) -> [char; 6] {
        // top-left, top-right, bottom-left, bottom-right, horizontal, vertical
        match self {
            Frame::Light => ['┌', '┐', '└', '┘', '─', '│'],
            Frame::Double => ['╔', '╗', '╚', '╝', '═', '║'],
        }
    }
}

// ── Primitives ───────────────────────────────────────────────────────────────

/// Start a frame: wipe the screen.
pub fn begin<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    Ok(())
}

/// Finish a frame: park the cursor on `park_row` and flush.
pub fn finish<W: Write>(out: &mut W, park_row: u16) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, park_row))?;
    out.flush()?;
    Ok(())
}

/// Print `text` at `(x, y)`. Off-screen (negative) positions are skipped.
pub fn put<W: Write>(
    out: &mut W,
    x: i32,
    y: i32,
    text: impl Display,
    color: Color,
) -> std::io::Result<()> {
    let (Ok(col), Ok(row)) = (u16::try_from(x), u16::try_from(y)) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

/// Like [`put`], in bold.
pub fn put_bold<W: Write>(
    out: &mut W,
    x: i32,
    y: i32,
    text: impl Display,
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetAttribute(Attribute::Bold))?;
    put(out, x, y, text, color)?;
    out.queue(style::SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Print `text` centred within a field `width` columns wide.
pub fn centered<W: Write>(
    out: &mut W,
    width: i32,
    y: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let x = (width - text.chars().count() as i32) / 2;
    put(out, x.max(0), y, text, color)
}

/// Outline a `width × height` rectangle whose top-left corner is `(x, y)`.
pub fn draw_box<W: Write>(
    out: &mut W,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    frame: Frame,
) -> std::io::Result<()> {
    let [tl, tr, bl, br, h, v] = frame.chars();
    let inner = h.to_string().repeat((width - 2).max(0) as usize);

    put(out, x, y, format!("{tl}{inner}{tr}"), C_BORDER)?;
    for row in y + 1..y + height - 1 {
        put(out, x, row, v, C_BORDER)?;
        put(out, x + width - 1, row, v, C_BORDER)?;
    }
    put(out, x, y + height - 1, format!("{bl}{inner}{br}"), C_BORDER)?;
    Ok(())
}

/// A centred multi-line overlay (banners for pause, game over, wins).
pub fn banner<W: Write>(
    out: &mut W,
    width: i32,
    center_row: i32,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let start = center_row - lines.len() as i32 / 2;
    for (i, (text, color)) in lines.iter().enumerate() {
        let x = (width - text.chars().count() as i32) / 2;
        put_bold(out, x.max(0), start + i as i32, text, *color)?;
    }
    Ok(())
}

pub fn hint<W: Write>(out: &mut W, width: i32, y: i32, text: &str) -> std::io::Result<()> {
    centered(out, width, y, text, C_HINT)
}

pub fn text<W: Write>(out: &mut W, x: i32, y: i32, text: impl Display) -> std::io::Result<()> {
    put(out, x, y, text, C_TEXT)
}
