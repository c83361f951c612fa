//! # diffd - Binary Diff Service
//!
//! Pair up submissions, diff on demand.
//!
//! Two independent clients each submit one half of a binary artifact as
//! base64 text under a shared identifier. Once both halves have arrived, a
//! third party can request a structural comparison: byte-identical, size
//! mismatch, or the exact byte ranges where the halves disagree.

// Module declarations
pub mod codec;
pub mod config;
pub mod diff;
pub mod server;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use store::PairStore;
pub use types::{Comparison, DiffRange, DiffdError, Side};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
