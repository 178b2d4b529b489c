//! Error taxonomy for refused engine operations.
//!
//! A refused operation leaves all of its inputs untouched. Probabilistic
//! failures (a missed extraction roll, a lost dungeon run) are not errors;
//! they come back as outcomes with `success: false`.

use thiserror::Error;

/// Resources an operation can run short of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Mana,
    Experience,
    StatPoints,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Mana => "mana",
            Resource::Experience => "experience",
            Resource::StatPoints => "stat points",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("insufficient {resource}: need {required}, have {available}")]
    InsufficientResource {
        resource: Resource,
        required: u64,
        available: u64,
    },

    #[error("invalid transition: {0}")]
    InvalidTransition(String),
}

impl EngineError {
    pub fn insufficient(resource: Resource, required: u64, available: u64) -> Self {
        EngineError::InsufficientResource {
            resource,
            required,
            available,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        EngineError::InvalidTransition(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_message() {
        let err = EngineError::insufficient(Resource::Mana, 20, 10);
        assert_eq!(err.to_string(), "insufficient mana: need 20, have 10");
    }

    #[test]
    fn test_not_found_message() {
        let err = EngineError::NotFound {
            kind: "item",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "item not found: abc");
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = EngineError::invalid("quest already completed");
        assert_eq!(
            err.to_string(),
            "invalid transition: quest already completed"
        );
    }
}
