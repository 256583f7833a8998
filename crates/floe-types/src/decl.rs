//! Member declarations: the per-level shape of an instance
//!
//! A level declares the names of its instance members ahead of assignment,
//! one list per visibility tier. Declared names are write-once: the
//! constructor body assigns each of them at most one time.

use crate::{FloeError, FloeResult, Tier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Declared member names for one construction level, partitioned by tier.
///
/// Names must be unique within a tier and may appear in at most one tier per
/// level. A child level may redeclare a name from an ancestor's tier to
/// override it; the ancestor's stored value is unaffected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDecls {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub private: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protected: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub public: Vec<String>,
}

impl MemberDecls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_private<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.private.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_protected<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_public<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.public.extend(names.into_iter().map(Into::into));
        self
    }

    /// The declared names for one tier
    pub fn names(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Private => &self.private,
            Tier::Protected => &self.protected,
            Tier::Public => &self.public,
        }
    }

    /// Iterate over all declared names with their tiers
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &str)> {
        Tier::ALL.into_iter().flat_map(move |tier| {
            self.names(tier).iter().map(move |name| (tier, name.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.private.is_empty() && self.protected.is_empty() && self.public.is_empty()
    }

    /// Enforce uniqueness: no name may be declared twice within a tier, nor
    /// appear in more than one tier at this level.
    pub fn validate(&self) -> FloeResult<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for tier in Tier::ALL {
            for name in self.names(tier) {
                if !seen.insert(name.as_str()) {
                    return Err(FloeError::duplicate(tier, name));
                }
            }
        }
        Ok(())
    }

    /// Check whether a name is declared at this level, in any tier
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|(_, n)| n == name)
    }
}
