// Service exports
pub mod cache;
pub mod roster;

pub use cache::{CacheError, CacheKey, CacheStats, RankingCache};
pub use roster::{RosterError, RosterStore};
