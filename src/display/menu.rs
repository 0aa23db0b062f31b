use std::io::Write;

use crossterm::{style::Color, terminal};

use super::{centered, put};

/// One launcher line: title, short description, best score this run.
pub struct Entry<'a> {
    pub title: &'a str,
    pub blurb: &'a str,
    pub best: u32,
}

pub fn render<W: Write>(out: &mut W, entries: &[Entry<'_>], selected: usize) -> std::io::Result<()> {
    super::begin(out)?;

    let (width, height) = terminal::size()?;
    let width = i32::from(width);
    let cy = i32::from(height) / 2;
    let left = (width / 2 - 22).max(0);

    centered(out, width, cy - 6, "★  TERMINAL  ARCADE  ★", Color::Cyan)?;
    centered(out, width, cy - 4, "Select a game:", Color::White)?;

    for (i, entry) in entries.iter().enumerate() {
        let row = cy - 2 + i as i32;
        let (marker, color) = if i == selected {
            ("▶", Color::Yellow)
        } else {
            (" ", Color::White)
        };
        put(out, left, row, format!("{marker} [{}] ", i + 1), Color::DarkGrey)?;
        put(out, left + 6, row, format!("{:<16}", entry.title), color)?;
        put(out, left + 22, row, entry.blurb, Color::DarkGrey)?;
        if entry.best > 0 {
            put(out, left + 40, row, format!("best {}", entry.best), Color::Yellow)?;
        }
    }

    centered(
        out,
        width,
        cy + entries.len() as i32,
        "↑ ↓ + ENTER or 1-4 : Play   Q : Quit",
        Color::DarkGrey,
    )?;

    super::finish(out, (cy + entries.len() as i32 + 2).max(0) as u16)
}
