//! Errors surfaced by previous-image resolution

use crate::key::ResolutionKey;
use thiserror::Error;

/// Failures that must not be absorbed by the resolver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The tagging service holds more than one record for one server group
    #[error("More than one set of entity tags found for {key}")]
    DuplicateTagRecords { key: ResolutionKey, count: usize },
}

impl ResolveError {
    /// Create a duplicate tag records error
    pub fn duplicate_tag_records(key: ResolutionKey, count: usize) -> Self {
        Self::DuplicateTagRecords { key, count }
    }

    /// The server group the error refers to
    pub fn key(&self) -> &ResolutionKey {
        match self {
            Self::DuplicateTagRecords { key, .. } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_contains_key() {
        let key = ResolutionKey::new("aws", "prod", "eu-west-1", "myapp-v003");
        let err = ResolveError::duplicate_tag_records(key.clone(), 2);
        assert_eq!(
            err.to_string(),
            "More than one set of entity tags found for aws:serverGroup:myapp-v003:prod:eu-west-1"
        );
        assert_eq!(err.key(), &key);
    }
}
