//! Contact lifecycle: persistent chat, outbound voice, stopping contacts and
//! user-defined contact attributes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::RehydrationType;
use crate::DataRecord;

/// Enables rehydration of chats for the lifespan of a contact.
///
/// `RehydrationType` chooses the contact used as the starting point:
/// `ENTIRE_PAST_SESSION` starts from the most recently terminated contact of
/// the past session identified by `SourceContactId`, `FROM_SEGMENT` from the
/// given contact itself. `ClientToken` makes the request idempotent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePersistentContactAssociationRequest {
    /// Length 1-100.
    instance_id: Option<String>,
    /// Length 1-256.
    initial_contact_id: Option<String>,
    rehydration_type: Option<RehydrationType>,
    /// Length 1-256.
    source_contact_id: Option<String>,
    /// Length up to 500.
    client_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePersistentContactAssociationResult {
    /// The contact actually used for rehydration.
    continued_from_contact_id: Option<String>,
}

/// Places an outbound call to a customer through a contact flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct StartOutboundVoiceContactRequest {
    /// E.164 phone number of the customer.
    destination_phone_number: Option<String>,
    /// Length up to 500.
    contact_flow_id: Option<String>,
    instance_id: Option<String>,
    client_token: Option<String>,
    /// Caller ID presented to the customer; alternative to `QueueId`.
    source_phone_number: Option<String>,
    /// Queue whose outbound caller ID is used.
    queue_id: Option<String>,
    /// Key/value pairs available to the contact flow. Up to 32 KB in total.
    attributes: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct StartOutboundVoiceContactResult {
    contact_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct StopContactRequest {
    contact_id: Option<String>,
    instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
pub struct StopContactResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct GetContactAttributesRequest {
    instance_id: Option<String>,
    initial_contact_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct GetContactAttributesResult {
    attributes: Option<BTreeMap<String, String>>,
}

/// Creates or updates user-defined attributes of a contact.
///
/// Attributes are kept for 24 months after the contact ends; an existing
/// key is overwritten by the service, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateContactAttributesRequest {
    initial_contact_id: Option<String>,
    instance_id: Option<String>,
    attributes: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
pub struct UpdateContactAttributesResult {}
