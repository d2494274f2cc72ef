//! A logging progress listener.

use gridlock_core::{BoardConfig, EventKind, TileEvent, TileListener};

/// A listener that logs solving progress.
///
/// This is the stand-in for an interactive display: candidate changes and
/// placements are logged at trace level, search guesses at debug level, and
/// a summary is logged when the listener is dropped with the board. Run with
/// `RUST_LOG=debug` (or `trace`) to see the output.
#[derive(Debug)]
pub struct TraceListener {
    config: BoardConfig,
    changes: u64,
    guesses: u64,
}

impl TraceListener {
    /// Creates a listener rendering symbols with `config`.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            changes: 0,
            guesses: 0,
        }
    }
}

impl TileListener for TraceListener {
    fn notify(&mut self, event: &TileEvent) {
        let rendered = self.config.render(event.value);
        match event.kind {
            EventKind::Changed => {
                self.changes += 1;
                log::trace!(
                    "{} <- {rendered:?} ({} candidates)",
                    event.position,
                    event.candidates.len()
                );
            }
            EventKind::Guessed => {
                self.guesses += 1;
                log::debug!("guess {rendered:?} at {}", event.position);
            }
        }
    }
}

impl Drop for TraceListener {
    fn drop(&mut self) {
        log::info!(
            "observed {} tile changes and {} guesses",
            self.changes,
            self.guesses
        );
    }
}
