use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{QueueStatus, QueueType};
use crate::DataRecord;

/// Outbound caller ID name, number and whisper flow of a queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct OutboundCallerConfig {
    /// Length 1-255.
    outbound_caller_id_name: Option<String>,
    outbound_caller_id_number_id: Option<String>,
    outbound_flow_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct Queue {
    /// Length 1-256.
    name: Option<String>,
    queue_arn: Option<String>,
    queue_id: Option<String>,
    /// Length 1-250.
    description: Option<String>,
    outbound_caller_config: Option<OutboundCallerConfig>,
    hours_of_operation_id: Option<String>,
    /// Minimum 0.
    max_contacts: Option<i32>,
    status: Option<QueueStatus>,
    tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct QueueSummary {
    id: Option<String>,
    arn: Option<String>,
    name: Option<String>,
    queue_type: Option<QueueType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct CreateQueueRequest {
    instance_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    outbound_caller_config: Option<OutboundCallerConfig>,
    hours_of_operation_id: Option<String>,
    max_contacts: Option<i32>,
    /// Up to 50 quick connects.
    quick_connect_ids: Option<Vec<String>>,
    /// Up to 50 tags; keys 1-128 characters, values up to 256.
    tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct CreateQueueResult {
    queue_arn: Option<String>,
    queue_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeQueueRequest {
    instance_id: Option<String>,
    queue_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeQueueResult {
    queue: Option<Queue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListQueuesRequest {
    instance_id: Option<String>,
    /// Up to 2 queue types.
    queue_types: Option<Vec<QueueType>>,
    next_token: Option<String>,
    /// Range 1-1000.
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ListQueuesResult {
    queue_summary_list: Option<Vec<QueueSummary>>,
    /// Absent on the last page.
    next_token: Option<String>,
}
