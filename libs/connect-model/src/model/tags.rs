use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DataRecord;

/// Adds tags to a resource. Existing tag keys are overwritten by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    resource_arn: Option<String>,
    /// Keys 1-128 characters, values up to 256; up to 50 tags per resource.
    tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceRequest {
    resource_arn: Option<String>,
    /// 1-50 keys.
    tag_keys: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceRequest {
    resource_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceResult {
    tags: Option<BTreeMap<String, String>>,
}
