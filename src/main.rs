//! Terminal warehouse runner (default binary).
//!
//! Reads keys through crossterm, feeds them to the session one input at a time and
//! redraws through the framebuffer renderer. The game has no clock: nothing changes
//! between key presses, so the loop blocks on input.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use simplelog::{ConfigBuilder, WriteLogger};

use tui_warehouse::config::{random_seed, PlayConfig};
use tui_warehouse::core::SessionState;
use tui_warehouse::input::{handle_key_event, meta_action, should_quit, MetaAction};
use tui_warehouse::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = PlayConfig::from_env().parse_args(&args)?;
    setup_logging(&config)?;

    let seed = config.seed_or_random();
    let mut session =
        SessionState::new(&seed).with_context(|| format!("cannot start seed {:?}", seed))?;
    info!("starting seed {:?}", session.seed());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!(
        "seed {}  score {}  {}",
        session.seed(),
        session.score(),
        if session.is_playing() { "unsolved" } else { "solved" }
    );
    Ok(())
}

fn setup_logging(config: &PlayConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    WriteLogger::init(config.log_level, ConfigBuilder::new().build(), file)?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut SessionState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => key,
            Event::Resize(..) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };

        if should_quit(key) {
            return Ok(());
        }

        match meta_action(key) {
            Some(MetaAction::Restart) => {
                session.restart()?;
                info!("restarted seed {:?}", session.seed());
            }
            Some(MetaAction::NewGame) => {
                *session = new_session()?;
                info!("new seed {:?}", session.seed());
            }
            None => {
                if let Some(input) = handle_key_event(key) {
                    if session.apply_input(input) && session.finish_if_won() {
                        info!(
                            "seed {:?} solved with score {}",
                            session.seed(),
                            session.score()
                        );
                    }
                }
            }
        }
    }
}

/// A session for a fresh random seed.
fn new_session() -> Result<SessionState> {
    // Retry on the rare seed whose board has no interior crate for the target.
    for _ in 0..8 {
        let seed = random_seed();
        match SessionState::new(&seed) {
            Ok(session) => return Ok(session),
            Err(err) => log::warn!("skipping seed: {}", err),
        }
    }
    Err(anyhow::anyhow!("no playable seed found"))
}
