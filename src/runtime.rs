//! Line-oriented terminal runtime.
//!
//! Reads input lines, turns them into events, feeds them to the handler,
//! forwards actions to the presenter and redraws the screen. Lines read from
//! the terminal are genuine interactions; lines replayed from a script are
//! synthetic, so the gesture guard refuses lightbox activations they trigger.

use crate::app::input::parse_line;
use crate::app::{handle_event, AppState, Event, Interaction, Provenance};
use crate::ui::helpers::position_cursor;
use crate::ui::{dispatch_actions, render, Presenter, TerminalPresenter};
use chrono::Utc;
use std::io::{self, BufRead, Write};

/// Terminal size used when `LINES`/`COLUMNS` are unset.
pub const DEFAULT_SIZE: (usize, usize) = (24, 80);

/// Rows and columns from the `LINES` and `COLUMNS` environment variables.
#[must_use]
pub fn terminal_size() -> (usize, usize) {
    let read = |name: &str, fallback: usize| {
        std::env::var(name)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v >= 10)
            .unwrap_or(fallback)
    };
    (read("LINES", DEFAULT_SIZE.0), read("COLUMNS", DEFAULT_SIZE.1))
}

/// Milliseconds since the Unix epoch.
fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// A running gallery session.
#[derive(Debug)]
pub struct Session {
    pub state: AppState,
    pub presenter: TerminalPresenter,
    provenance: Provenance,
    rows: usize,
    cols: usize,
}

impl Session {
    #[must_use]
    pub fn new(state: AppState, provenance: Provenance, (rows, cols): (usize, usize)) -> Self {
        Self {
            state,
            presenter: TerminalPresenter::new(),
            provenance,
            rows,
            cols,
        }
    }

    /// Handles `event` and dispatches its actions.
    ///
    /// # Returns
    ///
    /// `(render, quit)`. Handler errors are logged and shown as a notice.
    pub fn apply(&mut self, event: &Event) -> (bool, bool) {
        match handle_event(&mut self.state, event) {
            Ok((render, actions)) => (render, dispatch_actions(&actions, &mut self.presenter)),
            Err(e) => {
                tracing::error!(error = %e, event = ?event, "event handling failed");
                self.presenter.notice(&e.to_string());
                (true, false)
            }
        }
    }

    /// Handles one input line stamped at `at_ms`.
    ///
    /// # Returns
    ///
    /// `(render, quit)`.
    pub fn apply_line(&mut self, line: &str, at_ms: i64) -> (bool, bool) {
        let parsed = match parse_line(line, at_ms) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return (false, false),
            Err(e) => {
                tracing::debug!(error = %e, "unrecognized input");
                self.presenter.notice(&e.to_string());
                return (true, false);
            }
        };

        if parsed.gesture {
            let interaction = match self.provenance {
                Provenance::Genuine => Interaction::genuine(at_ms),
                Provenance::Synthetic => Interaction::synthetic(at_ms),
            };
            self.apply(&Event::Interaction(interaction));
        }

        let mut render = false;
        for event in &parsed.events {
            let (redraw, quit) = self.apply(event);
            render |= redraw;
            if quit {
                return (render, true);
            }
        }
        (render, false)
    }

    /// Writes the current frame and the pending status line to `out`.
    ///
    /// # Errors
    ///
    /// Returns the terminal write error.
    pub fn draw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let mut frame = render(&self.state, self.rows, self.cols);
        if let Some(status) = self.presenter.take_status() {
            position_cursor(&mut frame, self.rows, 1);
            frame.push_str(&status.chars().take(self.cols).collect::<String>());
        }
        out.write_all(frame.as_bytes())?;
        out.flush()
    }

    /// Runs until `input` ends or a quit action is dispatched.
    ///
    /// # Errors
    ///
    /// Returns the first error reading `input` or writing `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.draw(out)?;

        for line in input.lines() {
            let line = line?;
            let (render, quit) = self.apply_line(&line, now_ms());
            if quit {
                tracing::debug!("quit requested");
                break;
            }
            if render || self.presenter.has_status() {
                self.draw(out)?;
            }
        }
        Ok(())
    }
}
