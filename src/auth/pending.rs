//! In-flight guard for merge submissions.
//!
//! Merges are not idempotent from the client's point of view, so the
//! same merge must never be issued twice concurrently. Each merge
//! handler takes a per-debate ticket before calling the backend; a
//! second submission for the same debate while one is outstanding is
//! turned away instead of producing a duplicate request.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct PendingMerges {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl PendingMerges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the merge slot for a debate. Returns `None` if a merge
    /// for that debate is already in flight. The slot is released when
    /// the returned ticket is dropped, on both success and failure
    /// paths.
    pub fn begin(&self, debate_id: &str) -> Option<MergeTicket> {
        let mut set = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !set.insert(debate_id.to_string()) {
            return None;
        }
        Some(MergeTicket {
            set: Arc::clone(&self.inner),
            debate_id: debate_id.to_string(),
        })
    }
}

pub struct MergeTicket {
    set: Arc<Mutex<HashSet<String>>>,
    debate_id: String,
}

impl Drop for MergeTicket {
    fn drop(&mut self) {
        if let Ok(mut set) = self.set.lock() {
            set.remove(&self.debate_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_while_first_outstanding_is_rejected() {
        let pending = PendingMerges::new();
        let ticket = pending.begin("42").expect("first claim");
        assert!(pending.begin("42").is_none());
        drop(ticket);
        assert!(pending.begin("42").is_some());
    }

    #[test]
    fn claims_for_different_debates_are_independent() {
        let pending = PendingMerges::new();
        let _a = pending.begin("42").expect("claim 42");
        assert!(pending.begin("43").is_some());
    }

    #[test]
    fn ticket_release_survives_error_paths() {
        let pending = PendingMerges::new();
        {
            let _ticket = pending.begin("42").unwrap();
            // simulated failure: ticket dropped by unwinding scope
        }
        assert!(pending.begin("42").is_some());
    }
}
