//! Historical (`GetMetricData`) and real-time (`GetCurrentMetricData`)
//! metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{
    Channel, Comparison, CurrentMetricName, Grouping, HistoricalMetricName, Statistic, Unit,
};
use crate::DataRecord;

/// Threshold of a service-level metric, e.g. "answered in less than 60s".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct Threshold {
    comparison: Option<Comparison>,
    threshold_value: Option<f64>,
}

/// One metric to retrieve.
///
/// `Statistic` and `Unit` must match the metric: counts use `SUM`/`COUNT`,
/// times `AVG`/`SECONDS`, `OCCUPANCY` and `SERVICE_LEVEL` use `PERCENT`.
/// Only `SERVICE_LEVEL` takes a `Threshold`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalMetric {
    name: Option<HistoricalMetricName>,
    threshold: Option<Threshold>,
    statistic: Option<Statistic>,
    unit: Option<Unit>,
}

/// Queues (IDs or ARNs, up to 100) and channels to restrict metrics to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct Filters {
    queues: Option<Vec<String>>,
    /// Only `VOICE` is accepted by the service.
    channels: Option<Vec<Channel>>,
    routing_profiles: Option<Vec<String>>,
}

/// Requests historical metrics for an instance.
///
/// The reporting interval is given as epoch timestamps on 5-minute
/// boundaries, must not start more than 24 hours before the request and
/// must be shorter than 24 hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataRequest {
    instance_id: Option<String>,
    #[serde(default, with = "crate::value::epoch_seconds")]
    start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::value::epoch_seconds")]
    end_time: Option<DateTime<Utc>>,
    filters: Option<Filters>,
    /// Without groupings a summary over all queues is returned.
    groupings: Option<Vec<Grouping>>,
    historical_metrics: Option<Vec<HistoricalMetric>>,
    next_token: Option<String>,
    /// Range 1-100.
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct QueueReference {
    id: Option<String>,
    arn: Option<String>,
}

/// The queue and channel a metric result was grouped by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
    queue: Option<QueueReference>,
    channel: Option<Channel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalMetricData {
    metric: Option<HistoricalMetric>,
    value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalMetricResult {
    dimensions: Option<Dimensions>,
    collections: Option<Vec<HistoricalMetricData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataResult {
    /// Expires after 24 hours. Absent on the last page.
    next_token: Option<String>,
    metric_results: Option<Vec<HistoricalMetricResult>>,
}

/// One real-time metric to retrieve. `OLDEST_CONTACT_AGE` is reported in
/// `SECONDS`, every other current metric as a `COUNT`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentMetric {
    name: Option<CurrentMetricName>,
    unit: Option<Unit>,
}

/// Requests real-time metrics for an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct GetCurrentMetricDataRequest {
    instance_id: Option<String>,
    filters: Option<Filters>,
    groupings: Option<Vec<Grouping>>,
    current_metrics: Option<Vec<CurrentMetric>>,
    next_token: Option<String>,
    /// Range 1-100.
    max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentMetricData {
    metric: Option<CurrentMetric>,
    value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentMetricResult {
    dimensions: Option<Dimensions>,
    collections: Option<Vec<CurrentMetricData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, DataRecord)]
#[serde(rename_all = "PascalCase")]
pub struct GetCurrentMetricDataResult {
    next_token: Option<String>,
    metric_results: Option<Vec<CurrentMetricResult>>,
    /// When the metrics were captured.
    #[serde(default, with = "crate::value::epoch_seconds")]
    data_snapshot_time: Option<DateTime<Utc>>,
}
