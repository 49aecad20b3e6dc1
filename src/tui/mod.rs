//! The interactive terminal session.
//!
//! One single-threaded message loop drives the whole interface: a blocking
//! task pumps terminal events into the channel, a timer task pumps spinner
//! ticks, and each dispatched search worker sends its one outcome. The
//! loop draws, waits for the next [`app::Message`], hands it to the state
//! machine, and repeats until quit.

pub mod app;
pub mod theme;
pub mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::Res;
use app::{App, Message};
use theme::Theme;

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Res<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the interactive session until the user quits.
///
/// The terminal is restored on every exit path, including panics, through
/// the RAII guard.
pub async fn run() -> Res<()> {
    let mut guard = TerminalGuard::enter()?;

    // One channel for the lifetime of the application; every wake-up
    // source funnels into it.
    let (tx, mut rx) = mpsc::channel::<Message>(64);

    // Terminal events are read on a blocking task so the UI task never
    // stalls inside crossterm.
    let event_tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        loop {
            match crossterm::event::read() {
                Ok(event) => {
                    if event_tx.blocking_send(Message::Input(event)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    // Spinner animation ticks.
    let tick_tx = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tick_tx.send(Message::Tick).await.is_err() {
                break;
            }
        }
    });

    let mut app = App::new(tx);
    let theme = Theme::default();

    loop {
        guard.terminal.draw(|frame| ui::draw(frame, &mut app, &theme))?;

        if app.should_quit {
            break;
        }

        let Some(msg) = rx.recv().await else {
            break;
        };
        app.handle_message(msg);
    }

    Ok(())
}
