//! Smart search query box with simulated latency.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use super::suggestions::{RecentQueries, SUGGESTED_QUERIES};

/// Whether a search is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No search running.
    #[default]
    Idle,
    /// A search was accepted and its latency has not elapsed yet.
    Busy,
}

/// Outcome of [`SearchQueryState::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The search started.
    Accepted,
    /// The query was empty or whitespace only.
    RejectedEmpty,
    /// Another search is still running.
    RejectedBusy,
}

impl SubmitStatus {
    /// Stable name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::RejectedEmpty => "rejected-empty",
            Self::RejectedBusy => "rejected-busy",
        }
    }

    /// Check if the search started.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query text plus an idle/busy flag.
///
/// An accepted query flips the phase to [`SearchPhase::Busy`] and schedules a
/// tokio task that flips it back after the configured latency. There is no
/// cancellation. No matching is performed.
#[derive(Debug)]
pub struct SearchQueryState {
    query: String,
    phase: Arc<watch::Sender<SearchPhase>>,
    latency: Duration,
    recent: RecentQueries,
}

impl SearchQueryState {
    /// Default simulated latency.
    pub const DEFAULT_LATENCY: Duration = Duration::from_secs(2);

    /// Creates an idle search state with the given latency.
    #[must_use]
    pub fn new(latency: Duration, recent_limit: usize) -> Self {
        let (phase, _) = watch::channel(SearchPhase::Idle);
        Self {
            query: String::new(),
            phase: Arc::new(phase),
            latency,
            recent: RecentQueries::new(recent_limit),
        }
    }

    /// Current query box text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query box text without searching.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Copies the suggested query at `index` into the query box.
    pub fn apply_suggestion(&mut self, index: usize) -> Option<&str> {
        let suggestion = SUGGESTED_QUERIES.get(index)?;
        self.query = (*suggestion).to_string();
        Some(&self.query)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        *self.phase.borrow()
    }

    /// Check if a search is running.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase() == SearchPhase::Busy
    }

    /// Simulated latency.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Accepted queries, newest first.
    #[must_use]
    pub const fn recent(&self) -> &RecentQueries {
        &self.recent
    }

    /// Suggestions for the current query box text.
    #[must_use]
    pub fn suggestions(&self, limit: usize) -> Vec<String> {
        self.recent.suggest(self.query.trim(), limit)
    }

    /// Receiver observing every phase change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchPhase> {
        self.phase.subscribe()
    }

    /// Resolves once the phase is idle.
    pub async fn wait_idle(&self) {
        let mut rx = self.phase.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(|phase| *phase == SearchPhase::Idle).await;
    }

    /// Starts a search for `text`. Once accepted, `text` becomes the query
    /// box content; a rejected submission leaves the box untouched.
    ///
    /// Must be called within a tokio runtime.
    pub fn submit(&mut self, text: &str) -> SubmitStatus {
        let status = self.start(text.trim());
        if status.is_accepted() {
            self.query = text.to_string();
        }
        status
    }

    /// Starts a search for the current query box text.
    ///
    /// Must be called within a tokio runtime.
    pub fn submit_current(&mut self) -> SubmitStatus {
        let query = self.query.trim().to_string();
        self.start(&query)
    }

    fn start(&mut self, query: &str) -> SubmitStatus {
        if query.is_empty() {
            debug!("Ignoring empty search query");
            return SubmitStatus::RejectedEmpty;
        }

        let started = self.phase.send_if_modified(|phase| {
            if *phase == SearchPhase::Busy {
                false
            } else {
                *phase = SearchPhase::Busy;
                true
            }
        });
        if !started {
            debug!(query, "Search already running, ignoring submission");
            return SubmitStatus::RejectedBusy;
        }

        self.recent.track(query);
        info!(query, latency_ms = self.latency.as_millis(), "Search started");

        let phase = Arc::clone(&self.phase);
        let latency = self.latency;
        let query = query.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            phase.send_replace(SearchPhase::Idle);
            info!(%query, "Search finished");
        });

        SubmitStatus::Accepted
    }
}

impl Default for SearchQueryState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY, 20)
    }
}
