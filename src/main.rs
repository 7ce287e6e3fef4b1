//! Terminal kana drill runner (default binary).
//!
//! Parses the CLI, shows the configuration menu, then drives a [`Game`] with
//! the wall clock. Input comes from crossterm and frames go through the
//! framebuffer renderer.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use kana_drop::core::{Game, GameSnapshot, MenuAction, MenuState, SessionConfig, SimpleRng};
use kana_drop::input::{map_key, InputEvent};
use kana_drop::term::{final_score_line, FrameBuffer, FrameThrottle, GameView, TerminalRenderer, Viewport};
use kana_drop::types::{KanaScript, DEFAULT_START_LIVES, MAX_START_LEVEL, MAX_START_LIVES, MIN_START_LIVES};

/// Idle redraw interval when nothing changed.
const HEARTBEAT_MS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Starting level (values above 10 are clamped)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    level: Option<u32>,
    /// Starting lives
    #[arg(long, default_value_t = DEFAULT_START_LIVES,
          value_parser = clap::value_parser!(u32).range(MIN_START_LIVES as i64..=MAX_START_LIVES as i64))]
    lives: u32,
    /// Kana set: hiragana, katakana or both
    #[arg(long, default_value = "both", value_parser = parse_script)]
    script: KanaScript,
    /// Leave out dakuten and handakuten kana
    #[arg(long)]
    no_voiced: bool,
    /// Start immediately with the command line values
    #[arg(long)]
    skip_menu: bool,
    /// Write logs to this file (stdout belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let level = self.level.unwrap_or(1).min(MAX_START_LEVEL);
        SessionConfig::new(self.script, !self.no_voiced, level, self.lives)
    }
}

fn parse_script(s: &str) -> Result<KanaScript, String> {
    KanaScript::from_str(s).ok_or_else(|| format!("unknown script '{s}' (expected hiragana, katakana or both)"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = match &cli.log_file {
        Some(path) => Some(init_logging(path)?),
        None => None,
    };
    install_panic_hook();
    info!(target: "runtime", level = ?cli.level, lives = cli.lives, script = cli.script.as_str(), "startup");

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to enter terminal mode")?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    let _ = term.exit();

    let outcome = result?;
    if let Some(snap) = outcome {
        info!(target: "runtime", points = snap.points, correct = snap.correct, total = snap.total, "session_ended");
        println!("{}", final_score_line(&snap));
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")?;
    Ok(guard)
}

fn install_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(target: "runtime.panic", %info, "panic");
        // Leave raw mode so the panic message is readable.
        let mut term = TerminalRenderer::new();
        let _ = term.exit();
        default_panic(info);
    }));
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Returns the final snapshot, or `None` when the user quit from the menu.
fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<Option<GameSnapshot>> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let config = if cli.skip_menu {
        cli.session_config()
    } else {
        match run_menu(term, &view, &mut fb, cli.session_config())? {
            Some(config) => config,
            None => return Ok(None),
        }
    };

    let seed = rand::random::<u32>();
    info!(
        target: "runtime",
        script = config.script.as_str(),
        voiced = config.include_voiced,
        level = config.start_level,
        lives = config.start_lives,
        seed,
        "session_config"
    );
    let mut game = Game::start(config, SimpleRng::new(seed));
    run_game(term, &view, &mut fb, &mut game)?;
    Ok(Some(game.snapshot()))
}

fn run_menu(
    term: &mut TerminalRenderer,
    view: &GameView,
    fb: &mut FrameBuffer,
    initial: SessionConfig,
) -> Result<Option<SessionConfig>> {
    let mut menu = MenuState::new(initial);
    loop {
        view.render_menu_into(&menu, viewport(), fb);
        term.draw_swap(fb)?;

        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = match map_key(key) {
                    Some(InputEvent::Quit) => return Ok(None),
                    Some(InputEvent::Up) => MenuAction::Up,
                    Some(InputEvent::Down) => MenuAction::Down,
                    Some(InputEvent::Left) => MenuAction::Left,
                    Some(InputEvent::Right) => MenuAction::Right,
                    Some(InputEvent::Confirm) | Some(InputEvent::Char(' ')) => MenuAction::Confirm,
                    _ => continue,
                };
                if let Some(config) = menu.apply(action) {
                    return Ok(Some(config));
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn run_game(
    term: &mut TerminalRenderer,
    view: &GameView,
    fb: &mut FrameBuffer,
    game: &mut Game<SimpleRng>,
) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut snap = GameSnapshot::default();
    let mut throttle = FrameThrottle::new(HEARTBEAT_MS);

    loop {
        game.advance_to(now_ms());

        game.snapshot_into(&mut snap);
        let vp = viewport();
        if throttle.should_draw(now_ms(), snap.fingerprint(), (vp.width, vp.height)) {
            view.render_into(&snap, vp, fb);
            term.draw_swap(fb)?;
        }

        if snap.game_over {
            break;
        }
        if game.state().quitting() {
            return Ok(());
        }

        // Input with timeout until the next scheduled event.
        let timeout = match game.scheduler().next_due() {
            Some(due) => Duration::from_millis(due.saturating_sub(now_ms())),
            None => Duration::from_millis(HEARTBEAT_MS),
        };
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                // Bring the clock up to date so input lands after any due ticks.
                game.advance_to(now_ms());
                if let Some(ev) = map_key(key).and_then(InputEvent::to_game_event) {
                    game.dispatch(ev);
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                throttle.reset();
            }
            _ => {}
        }
    }

    info!(target: "runtime", "game_over");
    // Let the overlay stay up until any key.
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
            Event::Resize(..) => {
                term.invalidate();
                game.snapshot_into(&mut snap);
                view.render_into(&snap, viewport(), fb);
                term.draw_swap(fb)?;
            }
            _ => {}
        }
    }
}
