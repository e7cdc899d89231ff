//! Entity tag types as served by the tagging service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entity type under which server groups are tagged
pub const SERVER_GROUP_ENTITY_TYPE: &str = "serverGroup";

/// Stage whose availability signals that entity tags are supported
pub const ENTITY_TAGS_FEATURE: &str = "upsertEntityTags";

/// One tag record attached to a cloud resource
///
/// Every field is optional on the wire; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityTags {
    pub id: Option<String>,
    pub tags: Vec<Tag>,
    pub entity_ref: Option<EntityRef>,
}

impl EntityTags {
    /// Record holding only the given tags
    pub fn with_tags(tags: Vec<Tag>) -> Self {
        Self {
            tags,
            ..Self::default()
        }
    }
}

/// A single name/value pair within a tag record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    pub name: String,
    pub namespace: Option<String>,
    /// Arbitrary nested structure
    pub value: Value,
    pub value_type: Option<String>,
}

impl Tag {
    /// Create a tag with a name and value
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            ..Self::default()
        }
    }
}

/// The resource a tag record is attached to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityRef {
    pub cloud_provider: Option<String>,
    pub application: Option<String>,
    pub account_id: Option<String>,
    pub region: Option<String>,
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
}

/// Parameters of a tag lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTagsQuery {
    pub cloud_provider: String,
    pub entity_type: String,
    pub entity_id: String,
    pub account: String,
    pub region: String,
}

impl EntityTagsQuery {
    /// Lookup for the tags of a server group
    pub fn server_group(
        cloud_provider: impl Into<String>,
        server_group_name: impl Into<String>,
        account: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            cloud_provider: cloud_provider.into(),
            entity_type: SERVER_GROUP_ENTITY_TYPE.to_string(),
            entity_id: server_group_name.into(),
            account: account.into(),
            region: region.into(),
        }
    }

    /// Query string pairs in the tagging service's parameter names
    pub fn as_params(&self) -> [(&'static str, &str); 5] {
        [
            ("cloudProvider", self.cloud_provider.as_str()),
            ("entityType", self.entity_type.as_str()),
            ("entityId", self.entity_id.as_str()),
            ("account", self.account.as_str()),
            ("region", self.region.as_str()),
        ]
    }
}

/// An entry of the stage feature listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFeature {
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
}
