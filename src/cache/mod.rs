//! Cache Module
//!
//! Provides the plain in-memory cache and its TTL variant.

mod entry;
mod plain;
mod store;
mod ttl;


// Re-export public types
pub use entry::CacheEntry;
pub use plain::Cache;
pub use store::CacheStore;
pub use ttl::TtlCache;
