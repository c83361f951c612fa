//! DiffRange - a maximal run of differing byte positions

use serde::{Deserialize, Serialize};

/// A maximal contiguous run of byte positions where two blobs disagree
///
/// Produced by the diff engine for equal-length inputs. `offset + length`
/// never exceeds the length of the compared blobs, and `length` is always
/// at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRange {
    /// Byte offset where the run starts
    pub offset: usize,

    /// Number of consecutive differing bytes
    pub length: usize,
}

impl DiffRange {
    /// Create a new range
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Exclusive end position of the run
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}
