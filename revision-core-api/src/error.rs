use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevisionError {
    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("Relation {relation} does not exist for {owner_type}")]
    RelationNotFound { relation: String, owner_type: String },

    #[error("Related entity type not registered: {0}")]
    RelatedTypeNotRegistered(String),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Mutator error for '{key}': {message}")]
    Mutator { key: String, message: String },

    #[error("Primary Identifier Attribute '{identifier}' not set in revisionable model '{owner_type}'")]
    PrimaryIdentifierNotSet { identifier: String, owner_type: String },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl RevisionError {
    /// Drift errors are absorbed by the resolver and degrade to a fallback
    /// string. Everything else signals a broken integration.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RevisionError::UnknownEntityType(_)
                | RevisionError::RelationNotFound { .. }
                | RevisionError::RelatedTypeNotRegistered(_)
                | RevisionError::Lookup(_)
                | RevisionError::Mutator { .. }
        )
    }
}

pub type RevisionResult<T> = Result<T, RevisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert!(RevisionError::UnknownEntityType("Post".to_string()).is_recoverable());
        assert!(RevisionError::Lookup("connection reset".to_string()).is_recoverable());
        assert!(!RevisionError::PrimaryIdentifierNotSet {
            identifier: "slug".to_string(),
            owner_type: "Post".to_string(),
        }
        .is_recoverable());
    }

    #[test]
    fn test_primary_identifier_message() {
        let err = RevisionError::PrimaryIdentifierNotSet {
            identifier: "slug".to_string(),
            owner_type: "Post".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Primary Identifier Attribute 'slug' not set in revisionable model 'Post'"
        );
    }
}
