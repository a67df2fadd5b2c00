// Result cache in front of LLM generation.
// Keys come from `key`, storage and expiry from `store`, background reclamation
// from `sweeper`. Cache operations never perform I/O or await; only the
// sweeper task does.

pub mod key;
pub mod store;
pub mod sweeper;

pub use key::recommendations_key;
pub use store::{CacheStats, TtlCache};
pub use sweeper::spawn_sweeper;
