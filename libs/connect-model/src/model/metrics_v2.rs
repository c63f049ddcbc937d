//! Historical metrics, second generation (`GetMetricDataV2`).
//!
//! Metric names, filter keys and groupings are free-form strings here; the
//! service accepts new ones without a model change.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DataRecord;

/// A resource filter such as `QUEUE`, `ROUTING_PROFILE`, `AGENT`, `CHANNEL`
/// or `AGENT_HIERARCHY_LEVEL_ONE`..`FIVE`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct FilterV2 {
    filter_key: Option<String>,
    /// Up to 100 values per request; channel values do not count.
    filter_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct ThresholdV2 {
    /// `LT`, `LTE` or `GT`.
    comparison: Option<String>,
    threshold_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct MetricFilterV2 {
    metric_filter_key: Option<String>,
    metric_filter_values: Option<Vec<String>>,
    /// Matches contacts that do not have the filter values.
    negate: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct MetricV2 {
    name: Option<String>,
    threshold: Option<Vec<ThresholdV2>>,
    metric_filters: Option<Vec<MetricFilterV2>>,
}

/// Requests historical metrics for a resource, up to 35 days back.
///
/// At least one filter on queues, routing profiles, agents or user
/// hierarchy groups is required, and the interval must be shorter than
/// 24 hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataV2Request {
    resource_arn: Option<String>,
    #[serde(default, with = "crate::value::epoch_seconds")]
    start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::value::epoch_seconds")]
    end_time: Option<DateTime<Utc>>,
    /// 1-5 filter keys.
    filters: Option<Vec<FilterV2>>,
    /// Up to 3 groupings.
    groupings: Option<Vec<String>>,
    metrics: Option<Vec<MetricV2>>,
    next_token: Option<String>,
    /// Range 1-100.
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDataV2 {
    metric: Option<MetricV2>,
    value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct MetricResultV2 {
    /// Grouping key to value, e.g. `QUEUE` -> queue ID.
    dimensions: Option<BTreeMap<String, String>>,
    collections: Option<Vec<MetricDataV2>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataV2Result {
    next_token: Option<String>,
    metric_results: Option<Vec<MetricResultV2>>,
}
