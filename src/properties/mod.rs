//! Cache-aside core for property reads and write-triggered invalidation.
//!
//! Reads go through [`PropertyAccessor`]; writes go through
//! [`PropertyWriter`], which calls [`Invalidator`] once the store commit
//! has succeeded. [`MetricsReporter`] exposes the backend's own counters.

mod accessor;
mod invalidator;
mod metrics;
mod writer;

pub use accessor::PropertyAccessor;
pub use invalidator::Invalidator;
pub use metrics::{CacheMetrics, MetricsReporter};
pub use writer::{PropertyWriter, WriteError};

/// Cache key holding the full newest-first listing.
pub const ALL_PROPERTIES_KEY: &str = "all_properties";

/// Default lifetime of the listing entry.
pub const LIST_TTL_SECS: u64 = 3600;

/// Default lifetime of a single-property entry.
pub const DETAIL_TTL_SECS: u64 = 1800;

/// Cache key for a single property snapshot.
pub fn property_key(id: u64) -> String {
    format!("property_{}", id)
}

#[cfg(test)]
pub(crate) mod fakes;
