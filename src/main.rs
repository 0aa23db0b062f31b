mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use terminal_arcade::breakout::Breakout;
use terminal_arcade::config::{self, Settings};
use terminal_arcade::game::{Flow, Game, Key};
use terminal_arcade::game2048::Game2048;
use terminal_arcade::invaders::Session;
use terminal_arcade::pong::Pong;

#[derive(Parser, Debug)]
#[command(name = "terminal_arcade", version, about = "Classic arcade games in the terminal")]
struct Cli {
    /// Config file (default: <config dir>/terminal_arcade/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the menu and start this game
    #[arg(short, long, value_enum)]
    game: Option<GameKind>,

    /// Log filter, e.g. `debug` or `terminal_arcade=trace` (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GameKind {
    Invaders,
    Breakout,
    Pong,
    #[value(name = "2048")]
    Tiles,
}

impl GameKind {
    const ALL: [GameKind; 4] = [
        GameKind::Invaders,
        GameKind::Breakout,
        GameKind::Pong,
        GameKind::Tiles,
    ];

    fn title(self) -> &'static str {
        match self {
            GameKind::Invaders => "Space Invaders",
            GameKind::Breakout => "Breakout",
            GameKind::Pong => "Pong",
            GameKind::Tiles => "2048",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            GameKind::Invaders => "defend the planet",
            GameKind::Breakout => "clear the wall",
            GameKind::Pong => "two players",
            GameKind::Tiles => "merge the tiles",
        }
    }

    fn index(self) -> usize {
        GameKind::ALL.iter().position(|&g| g == self).unwrap_or(0)
    }
}

// ── Terminal ──────────────────────────────────────────────────────────────────

/// Restore terminal state - called on panic and on normal exit.
fn restore_terminal() {
    let mut out = stdout();
    let _ = out.execute(PopKeyboardEnhancementFlags);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

fn init_logging(filter: Option<&str>) -> Result<()> {
    let dir = config::log_dir();
    let writer: Box<dyn Write + Send> = match std::fs::create_dir_all(&dir)
        .and_then(|_| std::fs::File::create(dir.join("arcade.log")))
    {
        Ok(file) => Box::new(file),
        // Logging must never keep the games from starting.
        Err(_) => Box::new(std::io::sink()),
    };

    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter `{directives}`"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .init();
    Ok(())
}

/// crossterm → game key. Releases are dropped; presses and repeats both count.
fn to_key(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    Some(match event.code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    })
}

fn is_interrupt(event: &KeyEvent) -> bool {
    event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL)
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(GameKind),
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    best: &[u32; 4],
    selected: &mut usize,
) -> Result<MenuResult> {
    loop {
        let entries: Vec<display::menu::Entry<'_>> = GameKind::ALL
            .iter()
            .zip(best)
            .map(|(kind, &best)| display::menu::Entry {
                title: kind.title(),
                blurb: kind.blurb(),
                best,
            })
            .collect();
        display::menu::render(out, &entries, *selected)?;

        // Block until the user makes a choice
        let Ok(event) = rx.recv() else {
            return Ok(MenuResult::Quit);
        };
        let Event::Key(key_event) = event else {
            continue; // resize and friends: just redraw
        };
        if is_interrupt(&key_event) {
            return Ok(MenuResult::Quit);
        }
        match to_key(key_event) {
            Some(Key::Up) => *selected = selected.checked_sub(1).unwrap_or(GameKind::ALL.len() - 1),
            Some(Key::Down) => *selected = (*selected + 1) % GameKind::ALL.len(),
            Some(Key::Enter) | Some(Key::Space) => {
                return Ok(MenuResult::Start(GameKind::ALL[*selected]))
            }
            Some(Key::Esc) => return Ok(MenuResult::Quit),
            Some(Key::Char(c)) if c.eq_ignore_ascii_case(&'q') => return Ok(MenuResult::Quit),
            Some(Key::Char(c)) => {
                if let Some(kind) = c
                    .to_digit(10)
                    .and_then(|d| GameKind::ALL.get((d as usize).wrapping_sub(1)))
                {
                    *selected = kind.index();
                    return Ok(MenuResult::Start(*kind));
                }
            }
            _ => {}
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopExit {
    Menu,
    Quit,
}

/// Run `game` at `fps` until it asks to exit.
///
/// Input is drained without blocking at the start of every frame; the game
/// is then advanced by the measured time since the previous frame, rendered,
/// and the thread sleeps off the rest of the frame budget.
fn game_loop<G: Game, W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    game: &mut G,
    rng: &mut StdRng,
    fps: u32,
    render: fn(&mut W, &G) -> std::io::Result<()>,
) -> Result<LoopExit> {
    let frame = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
    tracing::info!(game = game.title(), fps, "starting");

    let mut last = Instant::now();
    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(key_event) = event else {
                continue;
            };
            if is_interrupt(&key_event) {
                return Ok(LoopExit::Quit);
            }
            if let Some(key) = to_key(key_event) {
                if game.handle_key(key) == Flow::Exit {
                    tracing::info!(game = game.title(), score = game.score(), "left game");
                    return Ok(LoopExit::Menu);
                }
            }
        }

        let dt = last.elapsed().as_secs_f32();
        last = Instant::now();
        game.update(dt, rng);

        render(out, game).context("failed to draw frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "launcher starting");

    let mut settings = Settings::discover(cli.config.as_deref()).context("failed to load config")?;
    if let Some(fps) = cli.fps {
        settings.fps = fps;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    settings.validate().context("invalid settings")?;
    tracing::info!(fps = settings.fps, seed = ?settings.seed, "settings loaded");

    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-repeat and release events; terminals without the kitty
    // protocol simply ignore this.
    let _ = out.execute(PushKeyboardEnhancementFlags(
        KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
    ));

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &settings, cli.game);

    let _ = out.flush();
    restore_terminal();
    match &result {
        Ok(()) => tracing::info!("launcher exiting"),
        Err(err) => tracing::error!("{err:#}"),
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
    direct: Option<GameKind>,
) -> Result<()> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Best scores for this run, indexed like `GameKind::ALL`.
    let mut best = [0u32; 4];
    let mut selected = direct.map_or(0, GameKind::index);
    let mut next = direct;

    loop {
        let kind = match next.take() {
            Some(kind) => kind,
            None => match show_menu(out, rx, &best, &mut selected)? {
                MenuResult::Start(kind) => kind,
                MenuResult::Quit => break,
            },
        };
        let slot = kind.index();
        let fps = settings.fps;

        let (exit, score) = match kind {
            GameKind::Invaders => {
                let mut game = Session::with_high_score(settings.invaders.clone(), best[slot]);
                let exit = game_loop(out, rx, &mut game, &mut rng, fps, display::invaders::render)?;
                (exit, game.high_score)
            }
            GameKind::Breakout => {
                let mut game = Breakout::new(settings.breakout.clone(), &mut rng);
                game.high_score = best[slot];
                let exit = game_loop(out, rx, &mut game, &mut rng, fps, display::breakout::render)?;
                (exit, game.high_score)
            }
            GameKind::Pong => {
                let mut game = Pong::new(settings.pong.clone(), &mut rng);
                let exit = game_loop(out, rx, &mut game, &mut rng, fps, display::pong::render)?;
                (exit, game.score())
            }
            GameKind::Tiles => {
                let mut game = Game2048::new(&mut rng);
                game.best_score = best[slot];
                let exit = game_loop(out, rx, &mut game, &mut rng, fps, display::tiles::render)?;
                (exit, game.best_score)
            }
        };
        best[slot] = best[slot].max(score);

        if let LoopExit::Quit = exit {
            break;
        }
        // Otherwise loop back to the menu
    }
    Ok(())
}
