//! Two-player Pong.

use rand::Rng;

use crate::config::PongTuning;
use crate::game::{Flow, Game, Key};

pub const WIDTH: i32 = 60;
pub const HEIGHT: i32 = 25;

pub const PADDLE_HEIGHT: i32 = 5;
pub const LEFT_PADDLE_X: i32 = 2;
pub const RIGHT_PADDLE_X: i32 = WIDTH - 3;

/// Seconds per ball step.
const STEP: f32 = 0.05;
const SERVE_DELAY: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Ball {
    fn serve<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: (WIDTH / 2) as f32,
            y: (HEIGHT / 2) as f32,
            dx: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            dy: rng.gen_range(-0.5..0.5),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Pong {
    /// Top row of each paddle.
    pub left_y: i32,
    pub right_y: i32,
    pub ball: Ball,
    pub left_score: u32,
    pub right_score: u32,
    pub winner: Option<Side>,
    pub paused: bool,
    winning_score: u32,
    step_timer: f32,
    serve_timer: f32,
    /// Set by `R` after a win; the rematch is served in `update` with the RNG.
    restart_requested: bool,
}

impl Pong {
    pub fn new<R: Rng>(tuning: PongTuning, rng: &mut R) -> Self {
        let start = HEIGHT / 2 - PADDLE_HEIGHT / 2;
        Self {
            left_y: start,
            right_y: start,
            ball: Ball::serve(rng),
            left_score: 0,
            right_score: 0,
            winner: None,
            paused: false,
            winning_score: tuning.winning_score,
            step_timer: 0.0,
            serve_timer: 0.0,
            restart_requested: false,
        }
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// Rematch: scores and paddles reset, a fresh ball waits at the centre.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        let start = HEIGHT / 2 - PADDLE_HEIGHT / 2;
        self.left_y = start;
        self.right_y = start;
        self.ball = Ball::serve(rng);
        self.left_score = 0;
        self.right_score = 0;
        self.winner = None;
        self.paused = false;
        self.step_timer = 0.0;
        self.serve_timer = SERVE_DELAY;
        self.restart_requested = false;
    }

    pub fn move_paddle(&mut self, side: Side, delta: i32) {
        let y = match side {
            Side::Left => &mut self.left_y,
            Side::Right => &mut self.right_y,
        };
        *y = (*y + delta).clamp(1, HEIGHT - PADDLE_HEIGHT - 1);
    }

    /// One ball step: walls, paddles, then scoring.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        if self.winner.is_some() {
            return;
        }
        let ball = &mut self.ball;
        ball.x += ball.dx;
        ball.y += ball.dy;

        if ball.y <= 1.0 {
            ball.y = 1.0;
            ball.dy = ball.dy.abs();
        } else if ball.y >= (HEIGHT - 2) as f32 {
            ball.y = (HEIGHT - 2) as f32;
            ball.dy = -ball.dy.abs();
        }

        let on_paddle = |top: i32, y: f32| top as f32 <= y && y < (top + PADDLE_HEIGHT) as f32;
        let left = LEFT_PADDLE_X as f32;
        let right = RIGHT_PADDLE_X as f32;

        if (left..=left + 1.0).contains(&ball.x) && on_paddle(self.left_y, ball.y) {
            ball.x = left + 1.0;
            ball.dx = ball.dx.abs();
            ball.dy = deflection(self.left_y, ball.y);
        }
        if (right - 1.0..=right).contains(&ball.x) && on_paddle(self.right_y, ball.y) {
            ball.x = right - 1.0;
            ball.dx = -ball.dx.abs();
            ball.dy = deflection(self.right_y, ball.y);
        }

        let x = ball.x;
        if x <= 1.0 {
            self.point(Side::Right, rng);
        } else if x >= (WIDTH - 2) as f32 {
            self.point(Side::Left, rng);
        }
    }

    fn point<R: Rng>(&mut self, side: Side, rng: &mut R) {
        let score = match side {
            Side::Left => &mut self.left_score,
            Side::Right => &mut self.right_score,
        };
        *score += 1;
        if *score >= self.winning_score {
            self.winner = Some(side);
            tracing::info!(
                left = self.left_score,
                right = self.right_score,
                ?side,
                "pong: match over"
            );
        } else {
            self.ball = Ball::serve(rng);
            self.serve_timer = SERVE_DELAY;
        }
    }
}

/// Vertical speed after a paddle hit: -1 at the top edge, +1 at the bottom.
fn deflection(paddle_top: i32, ball_y: f32) -> f32 {
    let hit = (ball_y - paddle_top as f32) / PADDLE_HEIGHT as f32;
    (hit - 0.5) * 2.0
}

impl Game for Pong {
    fn title(&self) -> &'static str {
        "Pong"
    }

    fn handle_key(&mut self, key: Key) -> Flow {
        if key == Key::Esc || key.is_char('q') {
            return Flow::Exit;
        }
        if self.winner.is_some() {
            if key.is_char('r') {
                self.restart_requested = true;
            }
            return Flow::Continue;
        }
        if key == Key::Space || key.is_char('p') {
            self.paused = !self.paused;
            return Flow::Continue;
        }
        if self.paused {
            return Flow::Continue;
        }
        match key {
            k if k.is_char('w') => self.move_paddle(Side::Left, -1),
            k if k.is_char('s') => self.move_paddle(Side::Left, 1),
            Key::Up => self.move_paddle(Side::Right, -1),
            Key::Down => self.move_paddle(Side::Right, 1),
            _ => {}
        }
        Flow::Continue
    }

    fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        if self.restart_requested {
            self.restart(rng);
            return;
        }
        if self.paused || self.winner.is_some() {
            return;
        }
        if self.serve_timer > 0.0 {
            self.serve_timer -= dt;
            return;
        }
        self.step_timer += dt;
        if self.step_timer >= STEP {
            self.step_timer = 0.0;
            self.step(rng);
        }
    }

    /// The leading side's points.
    fn score(&self) -> u32 {
        self.left_score.max(self.right_score)
    }

    fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
