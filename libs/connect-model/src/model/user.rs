use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::PhoneType;
use crate::DataRecord;

/// Identity details of a user. Ignored when the instance uses SAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct UserIdentityInfo {
    /// Length 1-100.
    first_name: Option<String>,
    /// Length 1-100.
    last_name: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct UserPhoneConfig {
    phone_type: Option<PhoneType>,
    auto_accept: Option<bool>,
    /// Seconds, minimum 0.
    after_contact_work_time_limit: Option<i32>,
    desk_phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    id: Option<String>,
    arn: Option<String>,
    /// Length 1-100.
    username: Option<String>,
    identity_info: Option<UserIdentityInfo>,
    phone_config: Option<UserPhoneConfig>,
    directory_user_id: Option<String>,
    /// 1-10 security profiles.
    security_profile_ids: Option<Vec<String>>,
    routing_profile_id: Option<String>,
    hierarchy_group_id: Option<String>,
    tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct UserSummary {
    id: Option<String>,
    arn: Option<String>,
    username: Option<String>,
}

/// Creates a user account in an instance.
///
/// `Password` is required when the instance manages identities itself and
/// must not be set for directory-backed instances, which pass
/// `DirectoryUserId` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    /// Length 1-100, pattern `[a-zA-Z0-9\_\-\.\@]+`.
    username: Option<String>,
    password: Option<String>,
    identity_info: Option<UserIdentityInfo>,
    phone_config: Option<UserPhoneConfig>,
    directory_user_id: Option<String>,
    security_profile_ids: Option<Vec<String>>,
    routing_profile_id: Option<String>,
    hierarchy_group_id: Option<String>,
    instance_id: Option<String>,
    tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserResult {
    user_id: Option<String>,
    user_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserRequest {
    user_id: Option<String>,
    instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserResult {
    user: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersRequest {
    instance_id: Option<String>,
    next_token: Option<String>,
    /// Range 1-1000.
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersResult {
    user_summary_list: Option<Vec<UserSummary>>,
    next_token: Option<String>,
}

/// Replaces the security profiles of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserSecurityProfilesRequest {
    security_profile_ids: Option<Vec<String>>,
    user_id: Option<String>,
    instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserIdentityInfoRequest {
    identity_info: Option<UserIdentityInfo>,
    user_id: Option<String>,
    instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserPhoneConfigRequest {
    phone_config: Option<UserPhoneConfig>,
    user_id: Option<String>,
    instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityProfileSummary {
    id: Option<String>,
    arn: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListSecurityProfilesRequest {
    instance_id: Option<String>,
    next_token: Option<String>,
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListSecurityProfilesResult {
    security_profile_summary_list: Option<Vec<SecurityProfileSummary>>,
    next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserRequest {
    instance_id: Option<String>,
    user_id: Option<String>,
}

/// Assigns a user to a hierarchy group. An absent `HierarchyGroupId`
/// removes the user from their current group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserHierarchyRequest {
    hierarchy_group_id: Option<String>,
    user_id: Option<String>,
    instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserRoutingProfileRequest {
    routing_profile_id: Option<String>,
    user_id: Option<String>,
    instance_id: Option<String>,
}
