//! Cache Module
//!
//! Cache backend contract plus an in-process implementation with TTL
//! expiration, LRU eviction and backend-side hit/miss accounting.

mod backend;
mod engine;
mod entry;
mod lru;
mod memory;
mod stats;


pub use backend::CacheBackend;
pub use engine::CacheEngine;
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use memory::MemoryCache;
pub use stats::CacheInfo;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 8 * 1024 * 1024; // 8 MB
