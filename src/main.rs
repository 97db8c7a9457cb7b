//! Terminal entry point.
//!
//! Thin wrapper around the library: parses `key=value` arguments, initializes
//! tracing and the application state, then hands stdin (or a replay script)
//! to a [`Session`].
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Start page**: Open `photographer=<id>` if configured
//! 3. **Loop**: Read a line, map it to events, handle them, dispatch actions
//! 4. **Render**: Redraw the frame after each line that changed something
//!
//! # Keybindings
//!
//! Listing page:
//! - `j`/`down`, `k`/`up`: Move selection
//! - `enter`: Open the selected photographer
//! - `/`: Search (then `type <text>`, `enter` to navigate results, `esc` to leave)
//! - `q`: Quit
//!
//! Photographer page:
//! - `j`/`k`: Move selection
//! - `enter`/`space`: Open the lightbox on the selected media
//! - `l`: Like the selected media
//! - `s`: Cycle the sort order
//! - `c`: Contact the photographer
//! - `b`/`esc`: Back to the listing
//!
//! Lightbox: `left`/`right` navigate, `tab`/`shift-tab` move focus, `enter`
//! activates the focused control, `esc` closes.

#![allow(clippy::multiple_crate_versions)]

use fisheye::app::Provenance;
use fisheye::observability::init_tracing;
use fisheye::runtime::{terminal_size, Session};
use fisheye::{initialize, Config, Event};
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fisheye: {e}");
            return ExitCode::from(2);
        }
    };

    init_tracing(&config);
    tracing::info!(catalog = ?config.catalog, script = ?config.script, "starting fisheye");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal I/O failed");
            eprintln!("fisheye: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> io::Result<()> {
    let state = initialize(config);
    let provenance = if config.script.is_some() {
        Provenance::Synthetic
    } else {
        Provenance::Genuine
    };

    let mut session = Session::new(state, provenance, terminal_size());
    if let Some(id) = config.photographer {
        session.apply(&Event::OpenPhotographer(id));
    }

    let mut stdout = io::stdout().lock();
    match &config.script {
        Some(path) => session.run(BufReader::new(File::open(path)?), &mut stdout),
        None => session.run(io::stdin().lock(), &mut stdout),
    }
}
