//! Outbound adapters implementing domain ports.
//!
//! - **memory**: lock-guarded collections backing the storage ports
//! - **randomness**: `rand`-backed permutation sources for reviewer selection
//!
//! Adapters translate between domain types and their own representation.
//! They contain no business logic.

pub mod memory;
pub mod randomness;

pub use memory::InMemoryReviewStore;
pub use randomness::{SeededRandomizer, ThreadRngRandomizer};
