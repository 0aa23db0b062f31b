//! Breakout: a paddle, a ball and five rows of bricks.

use rand::Rng;

use crate::config::BreakoutTuning;
use crate::game::{Flow, Game, Key};

pub const WIDTH: i32 = 60;
pub const HEIGHT: i32 = 25;

pub const PADDLE_WIDTH: i32 = 8;
pub const PADDLE_Y: i32 = HEIGHT - 2;
const PADDLE_STEP: i32 = 3;

pub const BRICK_ROWS: usize = 5;
pub const BRICK_COLS: usize = 9;
pub const BRICK_WIDTH: i32 = 5;
const BRICK_SPACING: i32 = 1;
const BRICK_SCORE: u32 = 10;

const BALL_START: (f32, f32) = ((WIDTH / 2) as f32, (HEIGHT - 5) as f32);
/// Seconds per physics step.
const STEP: f32 = 0.03;
/// Pause before a new ball is served.
const SERVE_DELAY: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct Brick {
    pub x: i32,
    pub y: i32,
    /// Row index, used for colouring.
    pub row: usize,
    pub active: bool,
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
        let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            x: BALL_START.0,
            y: BALL_START.1,
            dx: side * 0.5,
            dy: -1.0,
        }
    }

    pub fn cell(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

#[derive(Clone, Debug)]
pub struct Breakout {
    pub paddle_x: i32,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
    pub score: u32,
    pub high_score: u32,
    pub lives: u32,
    pub status: Status,
    pub paused: bool,
    step_timer: f32,
    serve_timer: f32,
    /// Set by `R` once the game ended; applied in `update` with the RNG.
    restart_requested: bool,
    tuning: BreakoutTuning,
}

impl Breakout {
    pub fn new<R: Rng>(tuning: BreakoutTuning, rng: &mut R) -> Self {
        Self {
            paddle_x: WIDTH / 2 - PADDLE_WIDTH / 2,
            ball: Ball::serve(rng),
            bricks: wall(),
            score: 0,
            high_score: 0,
            lives: tuning.lives,
            status: Status::Playing,
            paused: false,
            step_timer: 0.0,
            serve_timer: 0.0,
            restart_requested: false,
            tuning,
        }
    }

    /// New wall, full lives, fresh serve. The high score is kept.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.paddle_x = WIDTH / 2 - PADDLE_WIDTH / 2;
        self.ball = Ball::serve(rng);
        self.bricks = wall();
        self.score = 0;
        self.lives = self.tuning.lives;
        self.status = Status::Playing;
        self.paused = false;
        self.step_timer = 0.0;
        self.serve_timer = SERVE_DELAY;
        self.restart_requested = false;
    }

    pub fn bricks_left(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    pub fn move_paddle(&mut self, delta: i32) {
        self.paddle_x = (self.paddle_x + delta).clamp(1, WIDTH - PADDLE_WIDTH - 1);
    }

    /// One physics step.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        if self.status != Status::Playing {
            return;
        }
        let ball = &mut self.ball;
        ball.x += ball.dx;
        ball.y += ball.dy;

        // Walls
        if ball.x <= 1.0 {
            ball.x = 1.0;
            ball.dx = ball.dx.abs();
        }
        if ball.x >= (WIDTH - 2) as f32 {
            ball.x = (WIDTH - 2) as f32;
            ball.dx = -ball.dx.abs();
        }
        if ball.y <= 1.0 {
            ball.y = 1.0;
            ball.dy = ball.dy.abs();
        }

        // Paddle
        let paddle = self.paddle_x as f32;
        if ball.y as i32 == PADDLE_Y - 1 && (paddle..=paddle + PADDLE_WIDTH as f32).contains(&ball.x)
        {
            ball.dy = -ball.dy.abs();
            let hit = (ball.x - paddle) / PADDLE_WIDTH as f32;
            ball.dx = (hit - 0.5) * 1.5;
        }

        // Lost ball
        if ball.y >= PADDLE_Y as f32 {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.status = Status::Lost;
                tracing::info!(score = self.score, "breakout: game over");
                return;
            }
            self.ball = Ball::serve(rng);
            self.serve_timer = SERVE_DELAY;
            return;
        }

        // Bricks: first hit wins
        let (bx, by) = (ball.x, ball.y);
        if let Some(brick) = self.bricks.iter_mut().filter(|b| b.active).find(|b| {
            (b.y - 1) as f32 <= by
                && by <= (b.y + 1) as f32
                && b.x as f32 <= bx
                && bx <= (b.x + BRICK_WIDTH) as f32
        }) {
            brick.active = false;
            self.ball.dy = -self.ball.dy;
            self.score += BRICK_SCORE;
        }

        if self.bricks_left() == 0 {
            self.status = Status::Won;
            tracing::info!(score = self.score, "breakout: cleared");
        }
    }
}

/// The initial 5 × 9 brick wall, centred.
fn wall() -> Vec<Brick> {
    let total = BRICK_COLS as i32 * BRICK_WIDTH + (BRICK_COLS as i32 - 1) * BRICK_SPACING;
    let start_x = (WIDTH - total) / 2;
    (0..BRICK_ROWS)
        .flat_map(|row| {
            (0..BRICK_COLS).map(move |col| Brick {
                x: start_x + col as i32 * (BRICK_WIDTH + BRICK_SPACING),
                y: row as i32 * 2 + 2,
                row,
                active: true,
            })
        })
        .collect()
}

impl Game for Breakout {
    fn title(&self) -> &'static str {
        "Breakout"
    }

    fn handle_key(&mut self, key: Key) -> Flow {
        if key == Key::Esc || key.is_char('q') {
            return Flow::Exit;
        }
        if self.status != Status::Playing {
            if key.is_char('r') {
                self.restart_requested = true;
            }
            return Flow::Continue;
        }
        if key.is_char('p') {
            self.paused = !self.paused;
            return Flow::Continue;
        }
        if self.paused {
            return Flow::Continue;
        }
        if key == Key::Left || key.is_char('a') {
            self.move_paddle(-PADDLE_STEP);
        } else if key == Key::Right || key.is_char('d') {
            self.move_paddle(PADDLE_STEP);
        }
        Flow::Continue
    }

    fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        if self.restart_requested {
            self.restart(rng);
            return;
        }
        if self.paused || self.status != Status::Playing {
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
        self.high_score = self.high_score.max(self.score);
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn is_over(&self) -> bool {
        self.status != Status::Playing
    }
}
