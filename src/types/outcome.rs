//! Comparison - outcome classified by the diff engine

use super::DiffRange;
use serde::{Deserialize, Serialize};

/// Outcome of comparing the two halves of an artifact
///
/// Serialized with an internal `result` tag, so clients see
/// `{"result": "equal"}`, `{"result": "size_mismatch"}` or
/// `{"result": "content_mismatch", "ranges": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Comparison {
    /// Both halves are byte-identical
    Equal,

    /// The halves decode to different lengths
    SizeMismatch,

    /// Same length, but at least one byte differs
    ContentMismatch {
        /// Differing runs, ascending by offset, non-overlapping, with at
        /// least one matching byte between consecutive runs
        ranges: Vec<DiffRange>,
    },
}

impl Comparison {
    /// Check if the halves were identical
    pub fn is_equal(&self) -> bool {
        matches!(self, Comparison::Equal)
    }

    /// Check if the halves differed in length
    pub fn is_size_mismatch(&self) -> bool {
        matches!(self, Comparison::SizeMismatch)
    }

    /// Check if the halves differed in content
    pub fn is_content_mismatch(&self) -> bool {
        matches!(self, Comparison::ContentMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_serialization() {
        let json = serde_json::to_value(Comparison::Equal).unwrap();
        assert_eq!(json, json!({"result": "equal"}));
    }

    #[test]
    fn test_size_mismatch_serialization() {
        let json = serde_json::to_value(Comparison::SizeMismatch).unwrap();
        assert_eq!(json, json!({"result": "size_mismatch"}));
    }

    #[test]
    fn test_content_mismatch_serialization() {
        let outcome = Comparison::ContentMismatch {
            ranges: vec![DiffRange::new(1, 1), DiffRange::new(3, 2)],
        };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(
            json,
            json!({
                "result": "content_mismatch",
                "ranges": [
                    {"offset": 1, "length": 1},
                    {"offset": 3, "length": 2},
                ],
            })
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        let outcome = Comparison::ContentMismatch {
            ranges: vec![DiffRange::new(0, 4)],
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Comparison = serde_json::from_str(&json).unwrap();

        assert_eq!(back, outcome);
    }

    #[test]
    fn test_predicates() {
        assert!(Comparison::Equal.is_equal());
        assert!(Comparison::SizeMismatch.is_size_mismatch());
        assert!(Comparison::ContentMismatch { ranges: vec![] }.is_content_mismatch());

        assert!(!Comparison::Equal.is_content_mismatch());
        assert!(!Comparison::SizeMismatch.is_equal());
    }
}
