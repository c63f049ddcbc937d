//! Instance-level resources listed by summary: contact flows, hours of
//! operation, phone numbers and routing profiles, plus federation tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ContactFlowType, PhoneNumberType};
use crate::DataRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ContactFlowSummary {
    id: Option<String>,
    arn: Option<String>,
    name: Option<String>,
    contact_flow_type: Option<ContactFlowType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListContactFlowsRequest {
    instance_id: Option<String>,
    /// Up to 10 types.
    contact_flow_types: Option<Vec<ContactFlowType>>,
    next_token: Option<String>,
    /// Range 1-1000.
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListContactFlowsResult {
    contact_flow_summary_list: Option<Vec<ContactFlowSummary>>,
    next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct HoursOfOperationSummary {
    id: Option<String>,
    arn: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListHoursOfOperationsRequest {
    instance_id: Option<String>,
    next_token: Option<String>,
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListHoursOfOperationsResult {
    hours_of_operation_summary_list: Option<Vec<HoursOfOperationSummary>>,
    next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneNumberSummary {
    id: Option<String>,
    arn: Option<String>,
    /// E.164.
    phone_number: Option<String>,
    phone_number_type: Option<PhoneNumberType>,
    /// ISO 3166-1 alpha-2, e.g. `US`.
    phone_number_country_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListPhoneNumbersRequest {
    instance_id: Option<String>,
    /// Up to 2 types.
    phone_number_types: Option<Vec<PhoneNumberType>>,
    phone_number_country_codes: Option<Vec<String>>,
    next_token: Option<String>,
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListPhoneNumbersResult {
    phone_number_summary_list: Option<Vec<PhoneNumberSummary>>,
    next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct RoutingProfileSummary {
    id: Option<String>,
    arn: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListRoutingProfilesRequest {
    instance_id: Option<String>,
    next_token: Option<String>,
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListRoutingProfilesResult {
    routing_profile_summary_list: Option<Vec<RoutingProfileSummary>>,
    next_token: Option<String>,
}

/// Tokens for the Amazon Connect API, valid for a limited time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    access_token: Option<String>,
    #[serde(default, with = "crate::value::epoch_seconds")]
    access_token_expiration: Option<DateTime<Utc>>,
    refresh_token: Option<String>,
    #[serde(default, with = "crate::value::epoch_seconds")]
    refresh_token_expiration: Option<DateTime<Utc>>,
}

/// Requests a token for federation. Not available to root accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct GetFederationTokenRequest {
    instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct GetFederationTokenResult {
    credentials: Option<Credentials>,
}
