//! One Space Invaders session: owns every entity and runs the tick.

use rand::Rng;

use super::collision;
use super::entities::AlienGrid;
use super::fire::EnemyFire;
use super::formation::{Formation, StepOutcome};
use super::projectiles::Projectiles;
use super::shields::Shield;
use super::ufo::Ufo;
use super::{GAME_LEFT, GAME_RIGHT, PLAYER_START_X, PLAYER_Y};
use crate::config::InvadersTuning;
use crate::game::{Flow, Game, Key};

/// Player intent for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Shoot,
    Pause,
    Quit,
    Restart,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Left => Some(Command::Left),
            Key::Right => Some(Command::Right),
            Key::Space => Some(Command::Shoot),
            Key::Esc => Some(Command::Quit),
            k if k.is_char('a') => Some(Command::Left),
            k if k.is_char('d') => Some(Command::Right),
            k if k.is_char('p') => Some(Command::Pause),
            k if k.is_char('q') => Some(Command::Quit),
            k if k.is_char('r') => Some(Command::Restart),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    pub player_x: i32,
    pub lives: u32,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,

    pub aliens: AlienGrid,
    pub formation: Formation,
    pub fire: EnemyFire,
    pub ufo: Ufo,
    pub projectiles: Projectiles,
    pub shields: Vec<Shield>,

    tuning: InvadersTuning,
}

impl Session {
    pub fn new(tuning: InvadersTuning) -> Self {
        Self::with_high_score(tuning, 0)
    }

    /// A fresh session that remembers the best score of earlier sessions.
    pub fn with_high_score(tuning: InvadersTuning, high_score: u32) -> Self {
        Self {
            player_x: PLAYER_START_X,
            lives: tuning.lives,
            score: 0,
            high_score,
            level: 1,
            paused: false,
            game_over: false,
            aliens: AlienGrid::full_wave(),
            formation: Formation::new(
                tuning.move_delay,
                tuning.min_move_delay,
                tuning.animation_interval,
            ),
            fire: EnemyFire::new(tuning.fire_interval, tuning.fire_chance),
            ufo: Ufo::new(tuning.ufo_min_delay, tuning.ufo_chance),
            projectiles: Projectiles::default(),
            shields: Shield::row(),
            tuning,
        }
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Exit,
            Command::Pause => self.paused = !self.paused,
            Command::Restart if self.game_over => {
                *self = Self::with_high_score(self.tuning.clone(), self.high_score);
            }
            _ if self.paused || self.game_over => {}
            Command::Left => self.player_x = (self.player_x - 1).max(GAME_LEFT),
            Command::Right => self.player_x = (self.player_x + 1).min(GAME_RIGHT),
            Command::Shoot => {
                self.projectiles.fire_player(self.player_x, PLAYER_Y - 1);
            }
            Command::Restart => {}
        }
        Flow::Continue
    }

    // ── Tick ─────────────────────────────────────────────────────────────────

    /// Advance the simulation by `dt` seconds of wall-clock time.
    pub fn tick<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        if self.paused || self.game_over {
            return;
        }

        if let StepOutcome::Dropped {
            reached_player: true,
        } = self.formation.advance(&mut self.aliens, dt)
        {
            self.end_game("formation reached the player");
            return;
        }
        self.formation.animate(&mut self.aliens, dt);

        if let Some(bullet) = self.fire.maybe_fire(&self.aliens, dt, rng) {
            self.projectiles.push_enemy(bullet);
        }

        self.ufo.maybe_spawn(dt, rng);
        self.ufo.advance();
        self.projectiles.advance_all();
        self.projectiles.prune();

        self.resolve_collisions();

        self.high_score = self.high_score.max(self.score);
    }

    pub fn resolve_collisions(&mut self) {
        let res = collision::resolve(
            &mut self.projectiles,
            &mut self.aliens,
            &mut self.ufo,
            &mut self.shields,
            self.player_x,
        );
        self.score += res.score;
        if res.wave_cleared {
            self.next_level();
            return;
        }
        if res.lives_lost > 0 {
            self.lives = self.lives.saturating_sub(res.lives_lost);
            tracing::debug!(lives = self.lives, "player hit");
            if self.lives == 0 {
                self.end_game("out of lives");
            }
        }
    }

    /// Start the next wave. Score, lives and high score carry over.
    pub fn next_level(&mut self) {
        self.level += 1;
        self.aliens = AlienGrid::full_wave();
        self.formation.reset();
        self.fire.reset();
        self.ufo.reset();
        self.shields = Shield::row();
        self.projectiles.clear();
        tracing::info!(level = self.level, score = self.score, "invaders: next wave");
    }

    fn end_game(&mut self, reason: &str) {
        if !self.game_over {
            self.game_over = true;
            tracing::info!(score = self.score, level = self.level, reason, "invaders: game over");
        }
    }
}

impl Game for Session {
    fn title(&self) -> &'static str {
        "Space Invaders"
    }

    fn handle_key(&mut self, key: Key) -> Flow {
        match Command::from_key(key) {
            Some(command) => self.apply(command),
            None => Flow::Continue,
        }
    }

    fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        self.tick(dt, rng);
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn is_over(&self) -> bool {
        self.game_over
    }
}
