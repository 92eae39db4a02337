//! Debounced search dispatch.
//!
//! Every keystroke takes a ticket. A ticket settles after the quiet window
//! and is only acted on if no newer ticket was taken meanwhile, so a burst
//! of calls collapses into one remote search carrying the last query.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default quiet window before a query is sent.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Identifies one search request in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Collapses bursts of queries and tells superseded ones apart.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    window: Duration,
    latest: Arc<AtomicU64>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Register a new query, superseding every earlier ticket.
    pub fn ticket(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether no newer ticket has been taken since `ticket`.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Wait out the quiet window; `true` if `ticket` is still the latest.
    pub async fn settle(&self, ticket: SearchTicket) -> bool {
        tokio::time::sleep(self.window).await;
        self.is_current(ticket)
    }

    /// Supersede any outstanding ticket without issuing a new query.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}
