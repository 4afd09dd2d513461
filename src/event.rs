use std::io;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

/// Non-blocking keyboard reader for the single-threaded game loop.
///
/// The loop never waits on input: it drains whatever is pending and then
/// sleeps out the rest of the tick itself.
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns every key press queued since the previous call.
    pub fn drain(&self) -> io::Result<Vec<KeyEvent>> {
        let mut keys = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let crossterm::event::Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
