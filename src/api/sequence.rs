// src/api/sequence.rs - Guards views against out-of-order responses

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Issued when a request starts; compare it when the response lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Monotonic request counter for one view. A response may update the view
/// only while its ticket is still the latest one issued.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Makes every outstanding ticket stale
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for RequestSequence {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.latest, &other.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let seq = RequestSequence::new();
        let slow = seq.next();
        let fast = seq.next();

        assert!(seq.is_current(fast));
        assert!(!seq.is_current(slow));
        assert!(slow < fast);
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = RequestSequence::new();
        let handle = seq.clone();
        let ticket = seq.next();
        assert!(handle.is_current(ticket));
        assert_eq!(seq, handle);

        handle.invalidate();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn late_response_cannot_overwrite_newer_one() {
        let seq = RequestSequence::new();
        let shown = std::cell::RefCell::new(None);

        let load = |label: &'static str, ticket: Ticket, delay: usize| {
            let seq = seq.clone();
            let shown = &shown;
            async move {
                for _ in 0..delay {
                    tokio::task::yield_now().await;
                }
                if seq.is_current(ticket) {
                    *shown.borrow_mut() = Some(label);
                }
            }
        };

        let first = seq.next();
        let second = seq.next();
        tokio_test::block_on(async {
            futures::join!(load("first", first, 5), load("second", second, 0));
        });

        assert_eq!(shown.into_inner(), Some("second"));
    }
}
