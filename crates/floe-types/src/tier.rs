//! Visibility tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three classical visibility tiers.
///
/// The tier of a member decides which views expose it: private members are
/// visible to the declaring level only, protected members to the declaring
/// level and its descendants, public members everywhere including the
/// finished instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Private,
    Protected,
    Public,
}

impl Tier {
    /// All tiers, least visible first.
    pub const ALL: [Tier; 3] = [Tier::Private, Tier::Protected, Tier::Public];

    /// Get the tier name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Private => "private",
            Tier::Protected => "protected",
            Tier::Public => "public",
        }
    }

    /// Check whether members of this tier propagate to descendant levels
    pub fn is_inherited(&self) -> bool {
        !matches!(self, Tier::Private)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_names() {
        assert_eq!(Tier::Private.name(), "private");
        assert_eq!(Tier::Protected.name(), "protected");
        assert_eq!(Tier::Public.name(), "public");
    }

    #[test]
    fn test_tier_inheritance() {
        assert!(!Tier::Private.is_inherited());
        assert!(Tier::Protected.is_inherited());
        assert!(Tier::Public.is_inherited());
    }

    #[test]
    fn test_tier_serde() {
        let json = serde_json::to_string(&Tier::Protected).unwrap();
        assert_eq!(json, "\"protected\"");
        let tier: Tier = serde_json::from_str("\"private\"").unwrap();
        assert_eq!(tier, Tier::Private);
    }
}
