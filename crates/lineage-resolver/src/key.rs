//! Identity of a resolution target

use lineage_tags::{EntityTagsQuery, SERVER_GROUP_ENTITY_TYPE};
use std::fmt;

/// The server group a resolution is performed for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionKey {
    pub cloud_provider: String,
    pub account: String,
    pub region: String,
    pub server_group_name: String,
}

impl ResolutionKey {
    pub fn new(
        cloud_provider: impl Into<String>,
        account: impl Into<String>,
        region: impl Into<String>,
        server_group_name: impl Into<String>,
    ) -> Self {
        Self {
            cloud_provider: cloud_provider.into(),
            account: account.into(),
            region: region.into(),
            server_group_name: server_group_name.into(),
        }
    }

    /// Tag lookup for this server group
    pub fn to_query(&self) -> EntityTagsQuery {
        EntityTagsQuery::server_group(
            &self.cloud_provider,
            &self.server_group_name,
            &self.account,
            &self.region,
        )
    }
}

/// Formats as `provider:serverGroup:serverGroupName:account:region`
impl fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.cloud_provider,
            SERVER_GROUP_ENTITY_TYPE,
            self.server_group_name,
            self.account,
            self.region
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let key = ResolutionKey::new("aws", "prod", "us-east-1", "myapp-v003");
        assert_eq!(key.to_string(), "aws:serverGroup:myapp-v003:prod:us-east-1");
    }

    #[test]
    fn test_to_query() {
        let query = ResolutionKey::new("gce", "staging", "us-central1", "api-v010").to_query();
        assert_eq!(query.cloud_provider, "gce");
        assert_eq!(query.entity_type, "serverGroup");
        assert_eq!(query.entity_id, "api-v010");
        assert_eq!(query.account, "staging");
        assert_eq!(query.region, "us-central1");
    }
}
