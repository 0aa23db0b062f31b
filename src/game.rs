//! The seam between the launcher and the individual games.

use rand::Rng;

/// Terminal-independent key, translated from crossterm events by the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    Esc,
    Char(char),
}

impl Key {
    /// Case-insensitive check for a letter key.
    pub fn is_char(self, c: char) -> bool {
        matches!(self, Key::Char(k) if k.eq_ignore_ascii_case(&c))
    }
}

/// What the launcher should do after a key was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave the game and go back to the menu.
    Exit,
}

/// A game driven by the launcher's frame loop.
///
/// `update` receives the measured wall-clock time since the previous frame;
/// randomness is always injected so a seeded RNG reproduces a session.
pub trait Game {
    fn title(&self) -> &'static str;

    fn handle_key(&mut self, key: Key) -> Flow;

    fn update<R: Rng>(&mut self, dt: f32, rng: &mut R);

    fn score(&self) -> u32;

    fn is_over(&self) -> bool;
}
