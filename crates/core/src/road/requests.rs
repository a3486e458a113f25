//! Latest-wins bookkeeping for in-flight road-route requests.
//!
//! A rider can pick a new itinerary before the previous route has come back.
//! Each request takes a [`RouteTicket`]; only the ticket from the most recent
//! [`RouteRequests::begin`] may deliver its result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Handle for a single road-route request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTicket {
    pub key: String,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct RouteRequests {
    generation: AtomicU64,
    current: Mutex<Option<RouteTicket>>,
}

impl RouteRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `key`, superseding whatever was in flight.
    pub fn begin(&self, key: impl Into<String>) -> RouteTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let ticket = RouteTicket {
            key: key.into(),
            generation,
        };

        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = current.replace(ticket.clone()) {
            tracing::debug!(
                superseded = %previous.key,
                by = %ticket.key,
                "road route request superseded"
            );
        }

        ticket
    }

    /// Hand back `value` if `ticket` is still the latest request, and retire
    /// it. Stale results are dropped and yield `None`.
    pub fn settle<T>(&self, ticket: &RouteTicket, value: T) -> Option<T> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if current.as_ref() == Some(ticket) {
            *current = None;
            Some(value)
        } else {
            tracing::debug!(key = %ticket.key, "discarding stale road route");
            None
        }
    }

    /// Forget the in-flight request so its result is discarded on arrival.
    pub fn cancel(&self) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        current.take();
    }
}
