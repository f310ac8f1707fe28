//! Run sequencing. Every quiz result is stamped with an increasing run id.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Identifies one "calculate result" invocation. Strictly increasing per
/// process, so a client that retried can drop responses for older runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RunId(pub u64);

/// Issues run ids starting at 1.
#[derive(Debug, Default)]
pub struct RunSequencer {
    last: AtomicU64,
}

impl RunSequencer {
    pub fn next(&self) -> RunId {
        RunId(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_first_run_is_one() {
        let seq = RunSequencer::default();
        assert_eq!(seq.next(), RunId(1));
        assert_eq!(seq.next(), RunId(2));
    }

    #[test]
    fn test_retry_orders_after_previous_run() {
        let seq = RunSequencer::default();
        let first = seq.next();
        let retry = seq.next();
        assert!(first < retry);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let seq = Arc::new(RunSequencer::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let seq = Arc::clone(&seq);
                std::thread::spawn(move || (0..250).map(|_| seq.next().0).collect::<Vec<_>>())
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 1000);
        assert_eq!(ids.last(), Some(&1000));
    }
}
