//! Simplecache - An in-process key-value cache
//!
//! Provides a plain set/get/delete cache and a TTL variant whose expired
//! entries are removed by a background sweeper. Both variants only insert
//! absent keys; setting an existing key leaves it untouched.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, TtlCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
