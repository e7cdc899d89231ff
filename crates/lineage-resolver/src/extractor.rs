//! Locating and decoding the lineage tag

use lineage_tags::EntityTags;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Name of the tag carrying deployment lineage, matched case-insensitively
pub const LINEAGE_TAG: &str = "spinnaker:metadata";

/// Key of the lineage structure inside the tag value
const PREVIOUS_SERVER_GROUP: &str = "previousServerGroup";

/// What the lineage tag records about the server group that was replaced
///
/// Every field is optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviousServerGroup {
    #[serde(deserialize_with = "lenient_string")]
    pub image_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub image_name: Option<String>,
    pub build_info: Option<BuildInfo>,
}

impl PreviousServerGroup {
    /// Build number from the CI job info, if recorded
    pub fn build_number(&self) -> Option<&str> {
        self.build_info
            .as_ref()?
            .jenkins
            .as_ref()?
            .number
            .as_deref()
    }
}

/// CI provenance of an image
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildInfo {
    pub jenkins: Option<JenkinsInfo>,
}

/// Jenkins job that produced an image
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JenkinsInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub host: Option<String>,
}

/// Accepts strings, and numbers or booleans rendered as strings
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string, found {}",
            other
        ))),
    }
}

/// Find the lineage tag in `record` and decode its previous server group
///
/// Returns `None` when no tag matches, when the matching tag has no
/// `previousServerGroup` entry, or when that entry cannot be decoded.
pub fn extract(record: &EntityTags) -> Option<PreviousServerGroup> {
    let value = record
        .tags
        .iter()
        .filter(|tag| tag.name.eq_ignore_ascii_case(LINEAGE_TAG))
        .filter_map(|tag| tag.value.get(PREVIOUS_SERVER_GROUP))
        .find(|value| !value.is_null())?;

    match PreviousServerGroup::deserialize(value) {
        Ok(previous) => Some(previous),
        Err(e) => {
            debug!("Ignoring undecodable {}: {}", PREVIOUS_SERVER_GROUP, e);
            None
        }
    }
}
