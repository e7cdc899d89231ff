//! Turning a decoded descriptor into the rollback target

use crate::extractor::PreviousServerGroup;
use serde::Serialize;

/// The image a server group ran before its latest deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    image_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    build_number: Option<String>,
}

impl ImageDetails {
    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    /// Never empty
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    pub fn build_number(&self) -> Option<&str> {
        self.build_number.as_deref()
    }
}

/// Build image details from a descriptor
///
/// Yields `None` when there is no descriptor or it names no image.
pub fn build(descriptor: Option<PreviousServerGroup>) -> Option<ImageDetails> {
    let descriptor = descriptor?;
    let build_number = descriptor.build_number().map(str::to_string);

    let image_name = descriptor.image_name.filter(|name| !name.is_empty())?;

    Some(ImageDetails {
        image_id: descriptor.image_id,
        image_name,
        build_number,
    })
}
