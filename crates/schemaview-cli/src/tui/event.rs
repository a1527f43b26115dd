//! Event handling for the TUI.

use crossterm::event::{KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

/// Events that can occur in the application.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed
    Key(KeyEvent),
    /// The terminal was resized
    Resize,
}

/// Forwards terminal input to the app loop.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn the event polling task
        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();

            loop {
                let event = match reader.next().await {
                    Some(Ok(crossterm::event::Event::Key(key))) => {
                        // Only handle key press events, not release
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        Event::Key(key)
                    }
                    Some(Ok(crossterm::event::Event::Resize(_, _))) => Event::Resize,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "failed to read terminal event");
                        continue;
                    }
                    None => break,
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Get the next event.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
