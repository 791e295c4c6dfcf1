//! TUI event handling
//!
//! Bridges crossterm's blocking event poll into the tokio event loop. A
//! dedicated thread polls the terminal and forwards key/resize events over an
//! unbounded channel; poll timeouts become Tick events, which drive toast
//! expiry and the pending-action drain in the runner.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use eyre::Result;
use tokio::sync::mpsc;

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick (periodic refresh)
    Tick,
}

/// Translate a crossterm event, dropping the kinds the app ignores
fn translate(evt: event::Event) -> Option<Event> {
    match evt {
        // Only key presses; Windows terminals also deliver Release events
        event::Event::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        event::Event::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}

/// Event handler for the TUI
pub struct EventHandler {
    /// Event receiver
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::spawn(move || {
            loop {
                let outbound = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(evt) => match translate(evt) {
                            Some(event) => event,
                            None => continue,
                        },
                        Err(_) => continue,
                    }
                } else {
                    Event::Tick
                };

                if tx.send(outbound).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Get the next event (async)
    pub async fn next(&mut self) -> Result<Event> {
        self.rx.recv().await.ok_or_else(|| eyre::eyre!("Event channel closed"))
    }
}
