//! Interaction provenance and the gesture recency guard.
//!
//! Opening the lightbox must be attributable to a recent, genuine user gesture.
//! The runtime records every user-originated [`Interaction`] with its
//! [`Provenance`]; the [`GestureGuard`] then decides whether a later activation
//! request is backed by one.

/// Default recency window for a gesture to back an activation, in milliseconds.
pub const DEFAULT_GESTURE_WINDOW_MS: i64 = 2000;

/// Where an interaction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Direct human input, typed at the terminal.
    Genuine,
    /// Programmatic input: scripts, replays, generated events.
    Synthetic,
}

/// A single user-originated interaction (key press or click).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    pub provenance: Provenance,
    /// Wall-clock timestamp in milliseconds since the Unix epoch.
    pub at_ms: i64,
}

impl Interaction {
    /// A genuine interaction at `at_ms`.
    #[must_use]
    pub const fn genuine(at_ms: i64) -> Self {
        Self {
            provenance: Provenance::Genuine,
            at_ms,
        }
    }

    /// A synthetic interaction at `at_ms`.
    #[must_use]
    pub const fn synthetic(at_ms: i64) -> Self {
        Self {
            provenance: Provenance::Synthetic,
            at_ms,
        }
    }
}

/// Tracks the most recent interaction and gates activations on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureGuard {
    window_ms: i64,
    last: Option<Interaction>,
}

impl Default for GestureGuard {
    fn default() -> Self {
        Self::new(DEFAULT_GESTURE_WINDOW_MS)
    }
}

impl GestureGuard {
    /// Creates a guard with the given recency window. Negative windows are treated as 0.
    #[must_use]
    pub const fn new(window_ms: i64) -> Self {
        Self {
            window_ms: if window_ms < 0 { 0 } else { window_ms },
            last: None,
        }
    }

    /// Records `interaction` as the most recent one.
    pub fn record(&mut self, interaction: Interaction) {
        self.last = Some(interaction);
    }

    /// The most recently recorded interaction.
    #[must_use]
    pub const fn last(&self) -> Option<Interaction> {
        self.last
    }

    /// Returns `true` if an activation requested at `requested_at_ms` is backed by a
    /// genuine gesture recorded at most `window_ms` earlier.
    ///
    /// A request timestamped before the gesture is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use fisheye::app::gesture::{GestureGuard, Interaction};
    ///
    /// let mut guard = GestureGuard::default();
    /// guard.record(Interaction::genuine(10_000));
    /// assert!(guard.permits(11_500));
    /// assert!(!guard.permits(12_001));
    /// ```
    #[must_use]
    pub fn permits(&self, requested_at_ms: i64) -> bool {
        let Some(last) = self.last else {
            tracing::debug!("activation rejected: no recorded interaction");
            return false;
        };

        if last.provenance != Provenance::Genuine {
            tracing::debug!("activation rejected: last interaction is synthetic");
            return false;
        }

        let elapsed = requested_at_ms.saturating_sub(last.at_ms);
        let permitted = (0..=self.window_ms).contains(&elapsed);
        if !permitted {
            tracing::debug!(elapsed_ms = elapsed, window_ms = self.window_ms, "activation rejected: stale gesture");
        }
        permitted
    }
}
