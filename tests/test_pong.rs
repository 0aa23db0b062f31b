use terminal_arcade::config::PongTuning;
use terminal_arcade::game::{Flow, Game, Key};
use terminal_arcade::pong::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_game(winning_score: u32) -> (Pong, StdRng) {
    let mut rng = seeded_rng();
    let game = Pong::new(PongTuning { winning_score }, &mut rng);
    (game, rng)
}

fn place_ball(game: &mut Pong, x: f32, y: f32, dx: f32, dy: f32) {
    game.ball = Ball { x, y, dx, dy };
}

#[test]
fn new_match_is_centred() {
    let (game, _) = make_game(11);
    assert_eq!(game.left_y, HEIGHT / 2 - PADDLE_HEIGHT / 2);
    assert_eq!(game.right_y, game.left_y);
    assert_eq!((game.left_score, game.right_score), (0, 0));
    assert_eq!((game.ball.x, game.ball.y), ((WIDTH / 2) as f32, (HEIGHT / 2) as f32));
    assert_eq!(game.ball.dx.abs(), 1.0);
    assert!(game.ball.dy.abs() <= 0.5);
    assert_eq!(game.winning_score(), 11);
}

#[test]
fn paddles_clamp_inside_court() {
    let (mut game, _) = make_game(11);
    game.move_paddle(Side::Left, -100);
    assert_eq!(game.left_y, 1);
    game.move_paddle(Side::Right, 100);
    assert_eq!(game.right_y, HEIGHT - PADDLE_HEIGHT - 1);
}

#[test]
fn ball_bounces_off_top_wall() {
    let (mut game, mut rng) = make_game(11);
    place_ball(&mut game, 30.0, 1.5, 1.0, -1.0);
    game.step(&mut rng);
    assert_eq!(game.ball.y, 1.0);
    assert!(game.ball.dy > 0.0);
}

#[test]
fn left_paddle_returns_ball_with_deflection() {
    let (mut game, mut rng) = make_game(11);
    game.left_y = 10;
    place_ball(&mut game, 3.5, 12.0, -1.0, 0.0);
    game.step(&mut rng);

    assert_eq!(game.ball.x, (LEFT_PADDLE_X + 1) as f32);
    assert!(game.ball.dx > 0.0);
    // Hit above the paddle's middle sends the ball upward.
    assert!(game.ball.dy < 0.0);
    assert_eq!(game.right_score, 0);
}

#[test]
fn right_paddle_returns_ball() {
    let (mut game, mut rng) = make_game(11);
    game.right_y = 10;
    place_ball(&mut game, 55.5, 14.0, 1.0, 0.0);
    game.step(&mut rng);

    assert_eq!(game.ball.x, (RIGHT_PADDLE_X - 1) as f32);
    assert!(game.ball.dx < 0.0);
    assert!(game.ball.dy > 0.0);
}

#[test]
fn missed_ball_scores_for_the_other_side() {
    let (mut game, mut rng) = make_game(11);
    game.left_y = 15;
    place_ball(&mut game, 1.8, 3.0, -1.0, 0.0);
    game.step(&mut rng);

    assert_eq!((game.left_score, game.right_score), (0, 1));
    assert_eq!(game.ball.x, (WIDTH / 2) as f32);

    place_ball(&mut game, 57.5, 3.0, 1.0, 0.0);
    game.step(&mut rng);
    assert_eq!((game.left_score, game.right_score), (1, 1));
}

#[test]
fn reaching_winning_score_ends_match() {
    let (mut game, mut rng) = make_game(3);
    game.right_score = 2;
    place_ball(&mut game, 1.8, 3.0, -1.0, 0.0);
    game.step(&mut rng);

    assert_eq!(game.winner, Some(Side::Right));
    assert!(game.is_over());
    assert_eq!(game.score(), 3);

    // No more play until a rematch.
    let frozen = game.ball.clone();
    game.update(1.0, &mut rng);
    assert_eq!(game.ball, frozen);

    game.handle_key(Key::Char('r'));
    game.update(0.0, &mut rng);
    assert!(!game.is_over());
    assert_eq!((game.left_score, game.right_score), (0, 0));
}

#[test]
fn rematch_serves_from_centre_without_a_free_point() {
    let (mut game, mut rng) = make_game(3);
    game.right_score = 2;
    place_ball(&mut game, 1.8, 3.0, -1.0, 0.0);
    game.step(&mut rng);
    assert_eq!(game.winner, Some(Side::Right));

    game.handle_key(Key::Char('r'));
    game.update(0.0, &mut rng);
    assert_eq!((game.ball.x, game.ball.y), ((WIDTH / 2) as f32, (HEIGHT / 2) as f32));
    assert_eq!(game.ball.dx.abs(), 1.0);

    // Sit out the serve delay, then play the first few steps.
    game.update(0.6, &mut rng);
    for _ in 0..5 {
        game.update(0.06, &mut rng);
    }
    assert_eq!((game.left_score, game.right_score), (0, 0));
    assert!(game.winner.is_none());
    assert!(game.ball.x > 20.0 && game.ball.x < 40.0);
}

#[test]
fn controls() {
    let (mut game, _) = make_game(11);
    let start = game.left_y;
    game.handle_key(Key::Char('w'));
    assert_eq!(game.left_y, start - 1);
    game.handle_key(Key::Down);
    assert_eq!(game.right_y, start + 1);

    game.handle_key(Key::Space);
    assert!(game.paused);
    game.handle_key(Key::Char('s'));
    assert_eq!(game.left_y, start - 1);

    assert_eq!(game.handle_key(Key::Char('q')), Flow::Exit);
}
