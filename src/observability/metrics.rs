//! Metrics registry for the employee service
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Request counters shared by all handlers
///
/// Uses Relaxed ordering; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Successful creates
    employees_created: AtomicU64,
    /// Successful updates
    employees_updated: AtomicU64,
    /// Successful deletes
    employees_deleted: AtomicU64,
    /// Requests answered with 404
    not_found: AtomicU64,
    /// Error responses from the employee handlers, 405s included
    requests_rejected: AtomicU64,
}

/// Point-in-time copy of the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub employees_created: u64,
    pub employees_updated: u64,
    pub employees_deleted: u64,
    pub not_found: u64,
    pub requests_rejected: u64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_created(&self) {
        self.employees_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.employees_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.employees_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Read every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            employees_created: self.employees_created.load(Ordering::Relaxed),
            employees_updated: self.employees_updated.load(Ordering::Relaxed),
            employees_deleted: self.employees_deleted.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_registry_is_zero() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.employees_created, 0);
        assert_eq!(snapshot.requests_rejected, 0);
    }

    #[test]
    fn test_increments() {
        let metrics = MetricsRegistry::new();
        metrics.increment_created();
        metrics.increment_created();
        metrics.increment_updated();
        metrics.increment_deleted();
        metrics.increment_not_found();
        metrics.increment_rejected();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.employees_created, 2);
        assert_eq!(snapshot.employees_updated, 1);
        assert_eq!(snapshot.employees_deleted, 1);
        assert_eq!(snapshot.not_found, 1);
        assert_eq!(snapshot.requests_rejected, 1);
    }

    #[test]
    fn test_concurrent_increments() {
        let metrics = Arc::new(MetricsRegistry::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..100 {
                        metrics.increment_created();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.snapshot().employees_created, 800);
    }
}
