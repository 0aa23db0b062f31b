//! Terminal arcade: Space Invaders, Breakout, Pong and 2048.
//!
//! The library holds the game rules only. Terminal I/O, the menu and frame
//! pacing live in the binary (`src/main.rs` and `src/display/`).

pub mod breakout;
pub mod config;
pub mod error;
pub mod game;
pub mod game2048;
pub mod invaders;
pub mod pong;
