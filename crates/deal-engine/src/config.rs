//! Latency configuration for query recomputation.

use std::time::Duration;

/// Default simulated round-trip before a query result is published.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Configuration for a [`DealListing`](crate::DealListing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    /// Delay between a request and its published result.
    pub latency: Duration,
}

impl ListingConfig {
    /// Create a configuration with the given latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Create from a latency in milliseconds.
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// No simulated delay. Results still publish from a task.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}
