//! Property Cache - property listing read API with a cache-aside layer
//!
//! Reads are served from a TTL cache and fall back to the store on a miss;
//! every committed write invalidates the affected cache entries.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod properties;
pub mod seed;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
