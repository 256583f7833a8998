//! Error types for the Floe object protocol

use crate::Tier;

/// Errors that can occur while defining classes or constructing instances
#[derive(Debug, thiserror::Error)]
pub enum FloeError {
    #[error("Cannot reassign member: {0}")]
    Reassignment(String),

    #[error("Cannot modify frozen object, member: {0}")]
    ImmutabilityViolation(String),

    #[error("Duplicate member declaration at one level: {0}")]
    DuplicateMember(String),

    #[error("Unknown member: {0}")]
    UnknownMember(String),

    #[error("Member is not callable: {0}")]
    NotCallable(String),

    #[error("Method `{0}` was called after its instance was dropped")]
    DetachedMethod(String),

    #[error("Constructor failed: {0}")]
    Constructor(String),
}

impl FloeError {
    /// Convenience for reporting a tier-qualified duplicate declaration
    pub fn duplicate(tier: Tier, name: &str) -> Self {
        FloeError::DuplicateMember(format!("{} `{}`", tier, name))
    }
}

/// Result type alias for Floe operations
pub type FloeResult<T> = Result<T, FloeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FloeError::Reassignment("name".into());
        assert_eq!(err.to_string(), "Cannot reassign member: name");

        let err = FloeError::duplicate(Tier::Protected, "spells");
        assert_eq!(
            err.to_string(),
            "Duplicate member declaration at one level: protected `spells`"
        );
    }
}
