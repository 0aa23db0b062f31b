use terminal_arcade::config::InvadersTuning;
use terminal_arcade::game::{Flow, Game, Key};
use terminal_arcade::invaders::collision::{self, Resolution};
use terminal_arcade::invaders::fire::EnemyFire;
use terminal_arcade::invaders::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Defaults with enemy fire and the UFO switched off, so ticks are quiet.
fn quiet_tuning() -> InvadersTuning {
    InvadersTuning {
        fire_chance: 0.0,
        ufo_chance: 0.0,
        ..InvadersTuning::default()
    }
}

// ── Formation ─────────────────────────────────────────────────────────────────

#[test]
fn formation_shifts_until_edge_then_drops() {
    let mut grid = AlienGrid::full_wave();
    let mut formation = Formation::new(0.5, 0.1, 0.5);

    // Rightmost column starts at x=56; 21 shifts bring it to GAME_RIGHT.
    for _ in 0..(GAME_RIGHT - 56) {
        assert_eq!(formation.step(&mut grid), StepOutcome::Shifted);
    }
    assert_eq!(grid.get(0, 9).unwrap().x, GAME_RIGHT);

    let outcome = formation.step(&mut grid);
    assert_eq!(outcome, StepOutcome::Dropped { reached_player: false });
    assert_eq!(formation.direction, -1);
    assert_eq!(grid.get(0, 0).unwrap().y, ALIEN_START_Y + 1);
    // Dropping does not move horizontally.
    assert_eq!(grid.get(0, 9).unwrap().x, GAME_RIGHT);

    assert_eq!(formation.step(&mut grid), StepOutcome::Shifted);
    assert_eq!(grid.get(0, 9).unwrap().x, GAME_RIGHT - 1);
}

#[test]
fn formation_waits_for_cadence() {
    let mut grid = AlienGrid::full_wave();
    let mut formation = Formation::new(0.5, 0.1, 0.5);
    assert_eq!(formation.advance(&mut grid, 0.2), StepOutcome::Idle);
    assert_eq!(grid.get(0, 0).unwrap().x, 20);
    assert_eq!(formation.advance(&mut grid, 0.3), StepOutcome::Shifted);
    assert_eq!(grid.get(0, 0).unwrap().x, 21);
}

#[test]
fn cadence_scales_with_survivors_and_is_bounded() {
    let mut grid = AlienGrid::full_wave();
    let mut formation = Formation::new(0.5, 0.1, 0.5);

    let mut killed = 0;
    for alien in grid.alive_mut().take(25) {
        alien.alive = false;
        killed += 1;
    }
    assert_eq!(killed, 25);
    formation.advance(&mut grid, 0.5);
    assert!((formation.cadence - 0.25).abs() < 1e-6);

    for alien in grid.alive_mut().take(23) {
        alien.alive = false;
    }
    formation.advance(&mut grid, 0.5);
    assert!((formation.cadence - formation.min_cadence()).abs() < 1e-6);
    assert!(formation.cadence <= formation.base_cadence());
}

#[test]
fn reaching_player_row_is_reported() {
    let mut grid = AlienGrid::full_wave();
    let alien = grid.get_mut(4, 9).unwrap();
    alien.x = GAME_RIGHT;
    alien.y = PLAYER_Y - 1;

    let mut formation = Formation::new(0.5, 0.1, 0.5);
    assert_eq!(
        formation.step(&mut grid),
        StepOutcome::Dropped { reached_player: true }
    );
}

#[test]
fn animation_flips_on_its_own_clock() {
    let mut grid = AlienGrid::full_wave();
    let mut formation = Formation::new(0.5, 0.1, 0.4);
    formation.animate(&mut grid, 0.3);
    assert!(grid.alive().all(|a| !a.alt_frame));
    formation.animate(&mut grid, 0.2);
    assert!(grid.alive().all(|a| a.alt_frame));
}

// ── Enemy fire ────────────────────────────────────────────────────────────────

#[test]
fn enemy_fire_comes_from_front_line() {
    let mut rng = seeded_rng();
    let grid = AlienGrid::full_wave();
    let mut fire = EnemyFire::new(1.0, 1.0);

    assert!(fire.maybe_fire(&grid, 0.5, &mut rng).is_none());
    let bullet = fire.maybe_fire(&grid, 0.5, &mut rng).expect("chance 1.0 always fires");

    let front_y = ALIEN_START_Y + 4 * ALIEN_SPACING_Y;
    assert_eq!(bullet.owner, BulletOwner::Enemy);
    assert_eq!(bullet.y, front_y + 1);
    assert!(grid.front_aliens().iter().any(|a| a.x + 1 == bullet.x));
}

#[test]
fn enemy_fire_zero_chance_never_fires() {
    let mut rng = seeded_rng();
    let grid = AlienGrid::full_wave();
    let mut fire = EnemyFire::new(1.0, 0.0);
    for _ in 0..50 {
        assert!(fire.maybe_fire(&grid, 1.0, &mut rng).is_none());
    }
}

#[test]
fn enemy_fire_needs_a_living_alien() {
    let mut rng = seeded_rng();
    let mut grid = AlienGrid::full_wave();
    for alien in grid.alive_mut() {
        alien.alive = false;
    }
    let mut fire = EnemyFire::new(1.0, 1.0);
    assert!(fire.maybe_fire(&grid, 1.0, &mut rng).is_none());
}

// ── Collisions ────────────────────────────────────────────────────────────────

#[test]
fn alien_hit_beats_shield_for_same_bullet() {
    let mut grid = AlienGrid::full_wave();
    let target = grid.get(4, 0).unwrap().clone();
    let mut shields = vec![Shield::new(target.x - 1, target.y)];
    let mut ufo = Ufo::new(10.0, 0.0);
    let mut projectiles = Projectiles::default();
    projectiles.player.push(Bullet::new(target.x, target.y, BulletOwner::Player));

    let res = collision::resolve(&mut projectiles, &mut grid, &mut ufo, &mut shields, PLAYER_START_X);

    assert_eq!(res, Resolution { score: 10, lives_lost: 0, wave_cleared: false });
    assert!(!grid.get(4, 0).unwrap().alive);
    assert_eq!(shields[0].health_at(target.x, target.y), Some(SHIELD_CELL_HEALTH));
    assert!(projectiles.player.is_empty());
}

#[test]
fn alien_hitbox_tolerance_is_one_column() {
    let mut grid = AlienGrid::full_wave();
    let target = grid.get(4, 0).unwrap().clone();
    let mut bullets = vec![
        Bullet::new(target.x + 2, target.y, BulletOwner::Player),
        Bullet::new(target.x - 1, target.y, BulletOwner::Player),
    ];
    let (score, cleared) = collision::player_bullets_vs_aliens(&mut bullets, &mut grid);
    assert_eq!(score, 10);
    assert!(!cleared);
    assert!(bullets[0].is_active());
    assert!(!bullets[1].is_active());
}

#[test]
fn one_bullet_kills_at_most_one_alien() {
    let mut grid = AlienGrid::full_wave();
    // Squeeze two aliens onto neighbouring columns.
    let (x, y) = {
        let a = grid.get(4, 0).unwrap();
        (a.x, a.y)
    };
    grid.get_mut(4, 1).unwrap().x = x + 1;

    let mut bullets = vec![Bullet::new(x, y, BulletOwner::Player)];
    collision::player_bullets_vs_aliens(&mut bullets, &mut grid);
    assert_eq!(grid.alive_count(), 49);
}

#[test]
fn ufo_hit_awards_its_reward() {
    let mut ufo = Ufo::new(10.0, 0.0);
    ufo.launch(1, 150);
    ufo.x = 30;
    let mut bullets = vec![Bullet::new(33, ufo.y, BulletOwner::Player)];
    assert_eq!(collision::player_bullets_vs_ufo(&mut bullets, &mut ufo), 150);
    assert!(!ufo.active);
    assert!(!bullets[0].is_active());
}

#[test]
fn enemy_bullet_hits_player_within_one_column() {
    let mut bullets = vec![
        Bullet::new(41, PLAYER_Y, BulletOwner::Enemy),
        Bullet::new(43, PLAYER_Y, BulletOwner::Enemy),
        Bullet::new(40, PLAYER_Y - 1, BulletOwner::Enemy),
    ];
    assert_eq!(collision::enemy_bullets_vs_player(&mut bullets, 40), 1);
    assert!(!bullets[0].is_active());
    assert!(bullets[1].is_active());
    assert!(bullets[2].is_active());
}

#[test]
fn shields_absorb_both_bullet_kinds() {
    let mut shields = vec![Shield::new(10, 20)];
    let mut player = vec![Bullet::new(10, 21, BulletOwner::Player)];
    let mut enemy = vec![Bullet::new(10, 21, BulletOwner::Enemy)];
    collision::bullets_vs_shields(player.iter_mut().chain(enemy.iter_mut()), &mut shields);
    assert!(!player[0].is_active());
    assert!(!enemy[0].is_active());
    assert_eq!(shields[0].health_at(10, 21), Some(SHIELD_CELL_HEALTH - 2));
}

// ── Session ───────────────────────────────────────────────────────────────────

#[test]
fn new_session_defaults() {
    let s = Session::new(InvadersTuning::default());
    assert_eq!(s.lives, 3);
    assert_eq!(s.score, 0);
    assert_eq!(s.level, 1);
    assert_eq!(s.player_x, PLAYER_START_X);
    assert_eq!(s.aliens.alive_count(), 50);
    assert_eq!(s.shields.len(), SHIELD_COUNT);
    assert!(!s.game_over && !s.paused);
}

#[test]
fn key_mapping() {
    assert_eq!(Command::from_key(Key::Left), Some(Command::Left));
    assert_eq!(Command::from_key(Key::Char('A')), Some(Command::Left));
    assert_eq!(Command::from_key(Key::Char('d')), Some(Command::Right));
    assert_eq!(Command::from_key(Key::Space), Some(Command::Shoot));
    assert_eq!(Command::from_key(Key::Esc), Some(Command::Quit));
    assert_eq!(Command::from_key(Key::Char('x')), None);
}

#[test]
fn movement_clamps_to_playfield() {
    let mut s = Session::new(quiet_tuning());
    s.player_x = GAME_LEFT;
    s.apply(Command::Left);
    assert_eq!(s.player_x, GAME_LEFT);
    s.player_x = GAME_RIGHT;
    s.apply(Command::Right);
    assert_eq!(s.player_x, GAME_RIGHT);
}

#[test]
fn shoot_spawns_above_player_once() {
    let mut s = Session::new(quiet_tuning());
    s.apply(Command::Shoot);
    s.apply(Command::Shoot);
    assert_eq!(s.projectiles.player.len(), 1);
    let b = &s.projectiles.player[0];
    assert_eq!((b.x, b.y), (PLAYER_START_X, PLAYER_Y - 1));
}

#[test]
fn pause_freezes_input_and_tick() {
    let mut rng = seeded_rng();
    let mut s = Session::new(quiet_tuning());
    s.apply(Command::Pause);
    assert!(s.paused);

    s.apply(Command::Left);
    assert_eq!(s.player_x, PLAYER_START_X);
    let before = s.aliens.get(0, 0).unwrap().x;
    s.tick(5.0, &mut rng);
    assert_eq!(s.aliens.get(0, 0).unwrap().x, before);

    s.apply(Command::Pause);
    assert!(!s.paused);
}

#[test]
fn quit_exits_through_game_trait() {
    let mut s = Session::new(quiet_tuning());
    assert_eq!(s.handle_key(Key::Char('q')), Flow::Exit);
    assert_eq!(s.handle_key(Key::Left), Flow::Continue);
}

#[test]
fn clearing_the_wave_scores_900_and_advances_once() {
    let mut s = Session::new(quiet_tuning());
    let targets: Vec<(i32, i32)> = s.aliens.iter().map(|a| (a.x, a.y)).collect();
    for (x, y) in targets {
        s.projectiles.player.push(Bullet::new(x, y, BulletOwner::Player));
    }

    s.resolve_collisions();

    assert_eq!(s.score, 10 * (30 + 20 + 20 + 10 + 10));
    assert_eq!(s.level, 2);
    assert_eq!(s.aliens.alive_count(), 50);
    assert!(s.projectiles.player.is_empty());
    assert_eq!(s.lives, 3);
}

#[test]
fn long_frame_takes_one_step_without_catch_up() {
    let mut rng = seeded_rng();
    let mut s = Session::new(quiet_tuning());
    let before = s.aliens.get(0, 0).unwrap().x;

    // Four cadences' worth of time in a single frame.
    s.tick(2.0, &mut rng);
    assert_eq!(s.aliens.get(0, 0).unwrap().x, before + 1);

    // The timer restarted, so a short frame afterwards stays idle.
    s.tick(0.1, &mut rng);
    assert_eq!(s.aliens.get(0, 0).unwrap().x, before + 1);
}

#[test]
fn one_kill_per_pass_advances_level_on_the_last_alien() {
    let mut s = Session::new(quiet_tuning());
    let targets: Vec<(i32, i32)> = s.aliens.iter().map(|a| (a.x, a.y)).collect();
    assert_eq!(targets.len(), 50);

    for (i, (x, y)) in targets.into_iter().enumerate() {
        s.projectiles.player.push(Bullet::new(x, y, BulletOwner::Player));
        s.resolve_collisions();

        if i < 49 {
            assert_eq!(s.level, 1, "level changed early at kill {}", i + 1);
            assert_eq!(s.aliens.alive_count(), 49 - i);
        }
        assert!(s.projectiles.player.is_empty());
    }

    assert_eq!(s.level, 2);
    assert_eq!(s.score, 10 * (30 + 20 + 20 + 10 + 10));
    assert_eq!(s.aliens.alive_count(), 50);
}

#[test]
fn next_level_resets_wave_but_keeps_progress() {
    let mut s = Session::new(quiet_tuning());
    s.score = 1234;
    s.lives = 2;
    s.formation.direction = -1;
    s.formation.cadence = 0.2;
    s.shields[0] = Shield::new(0, 0);
    s.ufo.launch(1, 100);

    s.next_level();

    assert_eq!(s.level, 2);
    assert_eq!(s.score, 1234);
    assert_eq!(s.lives, 2);
    assert_eq!(s.formation.direction, 1);
    assert!((s.formation.cadence - s.formation.base_cadence()).abs() < 1e-6);
    assert_eq!(s.shields, Shield::row());
    assert!(!s.ufo.active);
}

#[test]
fn enemy_bullet_takes_last_life() {
    let mut s = Session::new(quiet_tuning());
    s.lives = 1;
    s.projectiles.push_enemy(Bullet::new(s.player_x, PLAYER_Y, BulletOwner::Enemy));

    s.resolve_collisions();

    assert_eq!(s.lives, 0);
    assert!(s.game_over);
    assert!(s.is_over());
}

#[test]
fn formation_reaching_player_ends_game() {
    let mut rng = seeded_rng();
    let mut s = Session::new(quiet_tuning());
    let alien = s.aliens.get_mut(4, 9).unwrap();
    alien.x = GAME_RIGHT;
    alien.y = PLAYER_Y - 1;

    s.tick(s.formation.cadence, &mut rng);
    assert!(s.game_over);

    // Movement is ignored once the game is over.
    s.apply(Command::Left);
    assert_eq!(s.player_x, PLAYER_START_X);
}

#[test]
fn restart_after_game_over_keeps_high_score() {
    let mut rng = seeded_rng();
    let mut s = Session::new(quiet_tuning());
    s.score = 500;
    s.tick(0.0, &mut rng);
    assert_eq!(s.high_score, 500);

    // Restart is ignored mid-game.
    s.apply(Command::Restart);
    assert_eq!(s.score, 500);

    s.game_over = true;
    s.apply(Command::Restart);
    assert!(!s.game_over);
    assert_eq!(s.score, 0);
    assert_eq!(s.high_score, 500);
    assert_eq!(s.level, 1);
    assert_eq!(s.lives, 3);
}

#[test]
fn player_bullet_travels_and_kills() {
    let mut rng = seeded_rng();
    let mut s = Session::new(quiet_tuning());
    let target = s.aliens.get(4, 5).unwrap().clone();
    s.player_x = target.x;
    // Clear the path through the shields.
    s.shields.clear();
    s.apply(Command::Shoot);

    let distance = (PLAYER_Y - 1) - target.y;
    for _ in 0..distance {
        s.tick(0.0, &mut rng);
    }
    assert!(!s.aliens.get(4, 5).unwrap().alive);
    assert_eq!(s.score, target.score());
    assert!(s.projectiles.player.is_empty());
}

#[test]
fn seeded_sessions_are_reproducible() {
    let tuning = InvadersTuning {
        fire_chance: 1.0,
        ufo_chance: 1.0,
        ufo_min_delay: 0.0,
        ..InvadersTuning::default()
    };
    let mut a = Session::new(tuning.clone());
    let mut b = Session::new(tuning);
    let (mut ra, mut rb) = (seeded_rng(), seeded_rng());
    for _ in 0..200 {
        a.tick(1.0 / 30.0, &mut ra);
        b.tick(1.0 / 30.0, &mut rb);
    }
    assert_eq!(a.score, b.score);
    assert_eq!(a.lives, b.lives);
    assert_eq!(a.ufo.x, b.ufo.x);
    assert_eq!(a.projectiles.enemy, b.projectiles.enemy);
}
