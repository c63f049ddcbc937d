//! Agent hierarchy: groups, their paths, and the five-level structure.

use serde::{Deserialize, Serialize};

use crate::DataRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyGroupSummary {
    id: Option<String>,
    arn: Option<String>,
    name: Option<String>,
}

/// Groups above a hierarchy group, from the top level down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyPath {
    level_one: Option<HierarchyGroupSummary>,
    level_two: Option<HierarchyGroupSummary>,
    level_three: Option<HierarchyGroupSummary>,
    level_four: Option<HierarchyGroupSummary>,
    level_five: Option<HierarchyGroupSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyGroup {
    id: Option<String>,
    arn: Option<String>,
    name: Option<String>,
    level_id: Option<String>,
    hierarchy_path: Option<HierarchyPath>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyLevel {
    id: Option<String>,
    arn: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyStructure {
    level_one: Option<HierarchyLevel>,
    level_two: Option<HierarchyLevel>,
    level_three: Option<HierarchyLevel>,
    level_four: Option<HierarchyLevel>,
    level_five: Option<HierarchyLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserHierarchyGroupsRequest {
    instance_id: Option<String>,
    next_token: Option<String>,
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserHierarchyGroupsResult {
    user_hierarchy_group_summary_list: Option<Vec<HierarchyGroupSummary>>,
    next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserHierarchyGroupRequest {
    hierarchy_group_id: Option<String>,
    instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserHierarchyGroupResult {
    hierarchy_group: Option<HierarchyGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserHierarchyStructureRequest {
    instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserHierarchyStructureResult {
    hierarchy_structure: Option<HierarchyStructure>,
}
