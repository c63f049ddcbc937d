use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::model::*;
use crate::record::DataRecord;

macro_rules! operations {
    (@result) => { None };
    (@result $result:ident) => { Some(<$result as DataRecord>::SHAPE) };

    ($( $(#[$meta:meta])* $op:ident($request:ident $(, $result:ident)?), )+) => {
        /// A service operation whose request and result shapes are modelled.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $( $(#[$meta])* $op, )+
        }

        impl Operation {
            const ALL: &'static [Operation] = &[$(Operation::$op),+];

            pub fn all() -> &'static [Operation] {
                Self::ALL
            }

            /// Operation name as used by the service, e.g. `CreateQueue`.
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$op => stringify!($op), )+
                }
            }

            pub fn request_shape(self) -> &'static str {
                match self {
                    $( Self::$op => <$request as DataRecord>::SHAPE, )+
                }
            }

            /// `None` when the service answers with an empty body.
            pub fn result_shape(self) -> Option<&'static str> {
                match self {
                    $( Self::$op => operations!(@result $($result)?), )+
                }
            }
        }

        impl FromStr for Operation {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($op) => Ok(Self::$op), )+
                    other => Err(ModelError::UnknownOperation(other.to_string())),
                }
            }
        }
    };
}

operations! {
    CreatePersistentContactAssociation(
        CreatePersistentContactAssociationRequest,
        CreatePersistentContactAssociationResult
    ),
    StartOutboundVoiceContact(StartOutboundVoiceContactRequest, StartOutboundVoiceContactResult),
    StopContact(StopContactRequest, StopContactResult),
    GetContactAttributes(GetContactAttributesRequest, GetContactAttributesResult),
    UpdateContactAttributes(UpdateContactAttributesRequest, UpdateContactAttributesResult),
    CreateQueue(CreateQueueRequest, CreateQueueResult),
    DescribeQueue(DescribeQueueRequest, DescribeQueueResult),
    ListQueues(ListQueuesRequest, ListQueuesResult),
    CreateUser(CreateUserRequest, CreateUserResult),
    DescribeUser(DescribeUserRequest, DescribeUserResult),
    ListUsers(ListUsersRequest, ListUsersResult),
    UpdateUserSecurityProfiles(UpdateUserSecurityProfilesRequest),
    UpdateUserIdentityInfo(UpdateUserIdentityInfoRequest),
    UpdateUserPhoneConfig(UpdateUserPhoneConfigRequest),
    ListSecurityProfiles(ListSecurityProfilesRequest, ListSecurityProfilesResult),
    DeleteUser(DeleteUserRequest),
    UpdateUserHierarchy(UpdateUserHierarchyRequest),
    UpdateUserRoutingProfile(UpdateUserRoutingProfileRequest),
    ListUserHierarchyGroups(ListUserHierarchyGroupsRequest, ListUserHierarchyGroupsResult),
    DescribeUserHierarchyGroup(DescribeUserHierarchyGroupRequest, DescribeUserHierarchyGroupResult),
    DescribeUserHierarchyStructure(
        DescribeUserHierarchyStructureRequest,
        DescribeUserHierarchyStructureResult
    ),
    ListRoutingProfiles(ListRoutingProfilesRequest, ListRoutingProfilesResult),
    ListContactFlows(ListContactFlowsRequest, ListContactFlowsResult),
    ListHoursOfOperations(ListHoursOfOperationsRequest, ListHoursOfOperationsResult),
    ListPhoneNumbers(ListPhoneNumbersRequest, ListPhoneNumbersResult),
    GetFederationToken(GetFederationTokenRequest, GetFederationTokenResult),
    TagResource(TagResourceRequest),
    UntagResource(UntagResourceRequest),
    ListTagsForResource(ListTagsForResourceRequest, ListTagsForResourceResult),
    /// Historical metrics for up to the last 24 hours.
    GetMetricData(GetMetricDataRequest, GetMetricDataResult),
    /// Real-time metrics.
    GetCurrentMetricData(GetCurrentMetricDataRequest, GetCurrentMetricDataResult),
    /// Historical metrics for up to the last 35 days.
    GetMetricDataV2(GetMetricDataV2Request, GetMetricDataV2Result),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
