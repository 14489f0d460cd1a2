//! Terminal Towers of Hanoi runner (default binary).
//!
//! Hosts one [`Session`] in the terminal: crossterm for input and the
//! framebuffer-based renderer from `tui_hanoi::term` for output.

use std::fs::{self, File};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use tui_hanoi::config::AppConfig;
use tui_hanoi::core::GameSnapshot;
use tui_hanoi::engine::{Notification, Overlay, Session, Submission, SystemClock};
use tui_hanoi::input::{
    handle_key_event, should_quit, should_toggle_leaderboard, NameInput, NameInputEvent,
};
use tui_hanoi::leaderboard::{FileStore, LeaderboardEntry};
use tui_hanoi::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use tui_hanoi::types::{GameAction, TIMER_TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    info!(
        num_disks = config.num_disks,
        data_dir = %config.data_dir.display(),
        "starting tui-hanoi"
    );

    let store = FileStore::new(config.data_dir.clone());
    let mut app = App::new(Session::new(config.num_disks, store, SystemClock::new()));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = app.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "exiting with error");
    }
    result
}

/// Log to a file, since stdout belongs to the renderer. No-op without a path.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("opening log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

struct App {
    session: Session<FileStore, SystemClock>,
    name_input: NameInput,
    show_leaderboard: bool,
    leaderboard: Vec<LeaderboardEntry>,
    quit: bool,
}

impl App {
    fn new(session: Session<FileStore, SystemClock>) -> Self {
        let leaderboard = session.leaderboard().into_entries();
        Self {
            session,
            name_input: NameInput::new(),
            show_leaderboard: false,
            leaderboard,
            quit: false,
        }
    }

    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(0, 0);
        let mut snap = GameSnapshot::default();

        let tick = Duration::from_millis(TIMER_TICK_MS as u64);
        let mut last_tick = Instant::now();

        while !self.quit {
            self.drain_notifications();

            // Render.
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            self.session.snapshot_into(&mut snap);
            let hud = HudView {
                timer_label: self.session.timer_label(),
                overlay: self.session.overlay(),
                leaderboard: self.show_leaderboard.then_some(self.leaderboard.as_slice()),
                name_input: self.name_input.text(),
            };
            view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;

            // Input with timeout until next tick.
            let timeout = tick.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key),
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
            }

            // Tick.
            if last_tick.elapsed() >= tick {
                last_tick = Instant::now();
                self.session.timer_tick();
            }
        }
        info!("quit requested");
        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) {
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if matches!(self.session.overlay(), Overlay::ScoreEntry(_)) && !ctrl_c {
            self.on_name_key(key);
            return;
        }

        if should_quit(key) {
            self.quit = true;
            return;
        }
        if should_toggle_leaderboard(key) {
            self.show_leaderboard = !self.show_leaderboard;
            return;
        }
        if key.code == KeyCode::Esc {
            self.show_leaderboard = false;
            return;
        }

        if let Some(action) = handle_key_event(key) {
            debug!(action = action.as_str(), "key action");
            if self.session.apply_action(action) {
                self.show_leaderboard = false;
            }
        }
    }

    fn on_name_key(&mut self, key: KeyEvent) {
        match self.name_input.handle_key(key) {
            NameInputEvent::Submit(name) => match self.session.submit_score(&name) {
                Ok(Submission::Ranked(rank)) => info!(rank, "score saved"),
                Ok(Submission::Displaced) => info!("score no longer fits the leaderboard"),
                Ok(Submission::NotPending) => debug!("no pending score"),
                // Still pending; the prompt stays open for another try.
                Err(e) => error!(error = %e, "could not save score"),
            },
            NameInputEvent::Cancel => {
                self.session.apply_action(GameAction::CancelSubmission);
            }
            NameInputEvent::Edited | NameInputEvent::Ignored => {}
        }
    }

    fn drain_notifications(&mut self) {
        for notification in self.session.drain_notifications() {
            match notification {
                Notification::LeaderboardChanged(entries) => {
                    self.leaderboard = entries;
                    self.show_leaderboard = true;
                }
                Notification::TimerLabelChanged(_) => {}
                other => debug!(?other, "notification"),
            }
        }
    }
}
