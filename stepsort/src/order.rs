//! Sort direction and the comparators derived from it.

use serde::{Deserialize, Serialize};

/// Direction of every comparator used by every algorithm in a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The "out of order" test every comparison primitive reports:
    /// ascending ⇒ `lhs > rhs`, descending ⇒ `lhs < rhs`.
    pub fn out_of_order(&self, lhs: u32, rhs: u32) -> bool {
        match self {
            Self::Ascending => lhs > rhs,
            Self::Descending => lhs < rhs,
        }
    }

    /// Stable take-left condition for merges: `lhs` may be emitted before
    /// `rhs` without reordering equal elements.
    pub fn takes_precedence(&self, lhs: u32, rhs: u32) -> bool {
        !self.out_of_order(lhs, rhs)
    }

    /// Strict "sorts before" test (cycle sort's position counting).
    pub fn strictly_precedes(&self, lhs: u32, rhs: u32) -> bool {
        self.out_of_order(rhs, lhs)
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort order `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order() {
        assert!(SortOrder::Ascending.out_of_order(5, 3));
        assert!(!SortOrder::Ascending.out_of_order(3, 5));
        assert!(!SortOrder::Ascending.out_of_order(4, 4));

        assert!(SortOrder::Descending.out_of_order(3, 5));
        assert!(!SortOrder::Descending.out_of_order(5, 3));
        assert!(!SortOrder::Descending.out_of_order(4, 4));
    }

    #[test]
    fn test_takes_precedence_is_stable() {
        // Equal elements may always be taken from the left slice.
        assert!(SortOrder::Ascending.takes_precedence(4, 4));
        assert!(SortOrder::Descending.takes_precedence(4, 4));
    }

    #[test]
    fn test_strictly_precedes() {
        assert!(SortOrder::Ascending.strictly_precedes(1, 2));
        assert!(!SortOrder::Ascending.strictly_precedes(2, 2));
        assert!(SortOrder::Descending.strictly_precedes(2, 1));
    }

    #[test]
    fn test_round_trip() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let parsed: SortOrder = order.to_string().parse().unwrap();
            assert_eq!(parsed, order);
        }
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
