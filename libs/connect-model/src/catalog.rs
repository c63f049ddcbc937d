//! Lookup of record shapes by their service-model name.
//!
//! Lets tooling work with records it only knows by name, e.g. loading a JSON
//! document captured from the wire into `CreateQueueRequest` and showing how
//! the record renders and hashes.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ModelError;
use crate::model::*;
use crate::record::DataRecord;

/// What a JSON document looks like once loaded into a shape.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub shape: &'static str,
    /// `Display` rendering, e.g. `{Name: Sales}`.
    pub rendered: String,
    pub hash_code: i32,
    pub present_fields: Vec<&'static str>,
    pub absent_fields: Vec<&'static str>,
    /// The record serialized back, with every field of the shape.
    pub normalized: serde_json::Value,
}

/// Loads `json` into `R` and describes the result.
pub fn inspect_as<R>(json: &str) -> Result<Inspection, ModelError>
where
    R: DataRecord + Serialize + DeserializeOwned,
{
    let record: R = serde_json::from_str(json)?;
    let present_fields = record.present_fields();
    let absent_fields = R::field_names()
        .iter()
        .copied()
        .filter(|name| !present_fields.contains(name))
        .collect();

    tracing::debug!(
        shape = R::SHAPE,
        present = present_fields.len(),
        total = R::field_names().len(),
        "record loaded"
    );

    Ok(Inspection {
        shape: R::SHAPE,
        rendered: record.to_string(),
        hash_code: record.hash_code(),
        present_fields,
        absent_fields,
        normalized: serde_json::to_value(&record)?,
    })
}

macro_rules! shape_catalog {
    ($($shape:ident),+ $(,)?) => {
        const SHAPES: &[&str] = &[$(stringify!($shape)),+];

        /// Names of all known shapes, grouped by API area.
        pub fn shape_names() -> &'static [&'static str] {
            SHAPES
        }

        /// Wire names of the fields of `shape`, in declaration order.
        pub fn field_names(shape: &str) -> Result<&'static [&'static str], ModelError> {
            match shape {
                $( stringify!($shape) => Ok(<$shape as DataRecord>::field_names()), )+
                other => Err(ModelError::UnknownShape(other.to_string())),
            }
        }

        /// Loads `json` (PascalCase keys) into the named shape.
        pub fn inspect(shape: &str, json: &str) -> Result<Inspection, ModelError> {
            match shape {
                $( stringify!($shape) => inspect_as::<$shape>(json), )+
                other => Err(ModelError::UnknownShape(other.to_string())),
            }
        }
    };
}

shape_catalog! {
    // contacts
    CreatePersistentContactAssociationRequest,
    CreatePersistentContactAssociationResult,
    StartOutboundVoiceContactRequest,
    StartOutboundVoiceContactResult,
    StopContactRequest,
    StopContactResult,
    GetContactAttributesRequest,
    GetContactAttributesResult,
    UpdateContactAttributesRequest,
    UpdateContactAttributesResult,
    // queues
    OutboundCallerConfig,
    Queue,
    QueueSummary,
    CreateQueueRequest,
    CreateQueueResult,
    DescribeQueueRequest,
    DescribeQueueResult,
    ListQueuesRequest,
    ListQueuesResult,
    // users
    UserIdentityInfo,
    UserPhoneConfig,
    User,
    UserSummary,
    CreateUserRequest,
    CreateUserResult,
    DescribeUserRequest,
    DescribeUserResult,
    ListUsersRequest,
    ListUsersResult,
    UpdateUserSecurityProfilesRequest,
    UpdateUserIdentityInfoRequest,
    UpdateUserPhoneConfigRequest,
    SecurityProfileSummary,
    ListSecurityProfilesRequest,
    ListSecurityProfilesResult,
    DeleteUserRequest,
    UpdateUserHierarchyRequest,
    UpdateUserRoutingProfileRequest,
    // user hierarchy
    HierarchyGroupSummary,
    HierarchyPath,
    HierarchyGroup,
    HierarchyLevel,
    HierarchyStructure,
    ListUserHierarchyGroupsRequest,
    ListUserHierarchyGroupsResult,
    DescribeUserHierarchyGroupRequest,
    DescribeUserHierarchyGroupResult,
    DescribeUserHierarchyStructureRequest,
    DescribeUserHierarchyStructureResult,
    // instance resources
    ContactFlowSummary,
    ListContactFlowsRequest,
    ListContactFlowsResult,
    HoursOfOperationSummary,
    ListHoursOfOperationsRequest,
    ListHoursOfOperationsResult,
    PhoneNumberSummary,
    ListPhoneNumbersRequest,
    ListPhoneNumbersResult,
    RoutingProfileSummary,
    ListRoutingProfilesRequest,
    ListRoutingProfilesResult,
    Credentials,
    GetFederationTokenRequest,
    GetFederationTokenResult,
    // tagging
    TagResourceRequest,
    UntagResourceRequest,
    ListTagsForResourceRequest,
    ListTagsForResourceResult,
    // historical metrics
    Threshold,
    HistoricalMetric,
    Filters,
    GetMetricDataRequest,
    QueueReference,
    Dimensions,
    HistoricalMetricData,
    HistoricalMetricResult,
    GetMetricDataResult,
    // current metrics
    CurrentMetric,
    GetCurrentMetricDataRequest,
    CurrentMetricData,
    CurrentMetricResult,
    GetCurrentMetricDataResult,
    // metrics v2
    FilterV2,
    ThresholdV2,
    MetricFilterV2,
    MetricV2,
    GetMetricDataV2Request,
    MetricDataV2,
    MetricResultV2,
    GetMetricDataV2Result,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_names_are_unique() {
        let mut names = shape_names().to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), shape_names().len());
        assert_eq!(shape_names().len(), 90);
    }

    #[test]
    fn field_names_follow_declaration_order() {
        assert_eq!(
            field_names("StopContactRequest").unwrap(),
            &["ContactId", "InstanceId"]
        );
        assert!(field_names("StopContactResult").unwrap().is_empty());
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let err = field_names("DeleteEverythingRequest").unwrap_err();
        assert!(matches!(err, ModelError::UnknownShape(ref s) if s == "DeleteEverythingRequest"));
        assert!(matches!(
            inspect("Nope", "{}").unwrap_err(),
            ModelError::UnknownShape(_)
        ));
    }

    #[test]
    fn inspect_reports_presence() {
        let inspection = inspect("QueueSummary", r#"{"Name":"Sales","QueueType":"STANDARD"}"#).unwrap();
        assert_eq!(inspection.shape, "QueueSummary");
        assert_eq!(inspection.rendered, "{Name: Sales,QueueType: STANDARD}");
        assert_eq!(inspection.present_fields, vec!["Name", "QueueType"]);
        assert_eq!(inspection.absent_fields, vec!["Id", "Arn"]);
        assert_eq!(inspection.normalized["Id"], serde_json::Value::Null);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = inspect("QueueSummary", "{\"Name\":").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }
}
