//! Identifier newtypes

use serde::{Deserialize, Serialize};

/// Unique identifier for a defined factory
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactoryId(pub String);

impl FactoryId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for FactoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_id() {
        let id = FactoryId::generate();
        assert!(!id.0.is_empty());
        assert_ne!(id, FactoryId::generate());
    }
}
