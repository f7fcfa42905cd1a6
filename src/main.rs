//! Terminal polytris runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`.
//! Gravity is driven by a [`TickScheduler`]; the time left until the next tick
//! doubles as the input poll timeout.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use tui_polytris::core::{EngineConfig, GameEngine, GameSnapshot, TickOutcome, TickScheduler};
use tui_polytris::input::{handle_key_event, is_start_key, should_quit};
use tui_polytris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_polytris::types::{Command, BOARD_COLUMNS, BOARD_ROWS};

/// Poll timeout while no gravity tick is pending (paused, game over, title).
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Falling-block puzzle with 15 polyomino shapes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Board height in cells.
    #[arg(long, default_value_t = BOARD_ROWS)]
    rows: u16,

    /// Board width in cells.
    #[arg(long, default_value_t = BOARD_COLUMNS)]
    columns: u16,

    /// Seed for the piece generator (defaults to the clock).
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Skip the title screen.
    #[arg(long)]
    no_title: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    let config = EngineConfig::with_size(args.rows, args.columns);
    let mut engine = GameEngine::with_config(config, seed)
        .with_context(|| format!("cannot start a {}x{} game", args.rows, args.columns))?;
    info!("starting {}x{} game, seed {}", args.rows, args.columns, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, !args.no_title);

    // Always try to restore terminal state.
    term.exit()?;
    result
}

/// Install env_logger writing to `path`. Without a path no logger is installed:
/// stderr is unusable while the terminal is in raw mode.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Show the title screen until the player starts (true) or quits (false).
fn title_screen(
    term: &mut TerminalRenderer,
    view: &GameView,
    engine: &GameEngine,
    fb: &mut FrameBuffer,
) -> Result<bool> {
    let config = engine.config();
    loop {
        view.render_title_into(config.rows, config.columns, viewport(), fb);
        term.draw_swap(fb)?;

        if !event::poll(IDLE_POLL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if should_quit(key) => return Ok(false),
            Event::Key(key) if is_start_key(key) => return Ok(true),
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn run(term: &mut TerminalRenderer, engine: &mut GameEngine, show_title: bool) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    if show_title && !title_screen(term, &view, engine, &mut fb)? {
        return Ok(());
    }

    let mut scheduler = TickScheduler::new();
    let mut last = Instant::now();

    loop {
        scheduler.sync(engine.is_running(), engine.tick_interval_ms());

        engine.snapshot_into(&mut snap);
        view.render_into(&snap, viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = scheduler
            .remaining_ms()
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        engine.apply(command);
                        if command == Command::Restart {
                            // New game, new gravity interval.
                            scheduler.cancel();
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;

        if scheduler.advance(elapsed) {
            if let TickOutcome::Locked(event) = engine.tick() {
                if event.game_over {
                    info!("final score {}", engine.score());
                }
            }
        }
    }
}
