//! Side - submission channel designation

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two submission channels for an identifier
///
/// Serializes as lowercase `left`/`right`, matching the request path
/// segment clients use when submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// First half of the pair
    Left,

    /// Second half of the pair
    Right,
}

impl Side {
    /// Stable lowercase name, as used in request paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_path_segment() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn test_deserialize_from_lowercase() {
        let left: Side = serde_json::from_str("\"left\"").unwrap();
        let right: Side = serde_json::from_str("\"right\"").unwrap();

        assert_eq!(left, Side::Left);
        assert_eq!(right, Side::Right);
    }

    #[test]
    fn test_deserialize_rejects_unknown_segment() {
        let result: Result<Side, _> = serde_json::from_str("\"middle\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_usable_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert((1_u64, Side::Left), "a");
        map.insert((1_u64, Side::Right), "b");

        assert_eq!(map.get(&(1, Side::Left)), Some(&"a"));
        assert_eq!(map.get(&(1, Side::Right)), Some(&"b"));
    }
}
