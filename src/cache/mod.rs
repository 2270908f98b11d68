// Local cache for the last successful fetch result.

pub mod paths;
pub mod store;

pub use store::{CACHE_TTL_MS, CacheEntry, CacheStore};
