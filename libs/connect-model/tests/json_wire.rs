use chrono::{TimeZone, Utc};
use connect_model::catalog;
use connect_model::{
    Channel, CurrentMetricName, DataRecord, DescribeUserHierarchyGroupResult,
    GetCurrentMetricDataResult, GetMetricDataRequest, GetMetricDataV2Result, Grouping,
    HistoricalMetricName, Operation, QueueSummary, Statistic, StopContactResult, Unit,
    UpdateUserRoutingProfileRequest,
};
use serde_json::json;

const METRIC_REQUEST: &str = r#"{
    "InstanceId": "inst-1",
    "StartTime": 1704067200,
    "EndTime": 1704070800.5,
    "Filters": { "Queues": ["q-1", "q-2"], "Channels": ["VOICE"] },
    "Groupings": ["QUEUE"],
    "HistoricalMetrics": [
        { "Name": "CONTACTS_HANDLED", "Statistic": "SUM", "Unit": "COUNT" },
        { "Name": "SERVICE_LEVEL", "Statistic": "AVG", "Unit": "PERCENT",
          "Threshold": { "Comparison": "LT", "ThresholdValue": 80 } }
    ],
    "MaxResults": 50
}"#;

#[test]
fn metric_request_loads_from_wire_names() {
    let request: GetMetricDataRequest = serde_json::from_str(METRIC_REQUEST).unwrap();

    assert_eq!(request.instance_id(), Some("inst-1"));
    assert_eq!(
        request.start_time(),
        Some(&Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(request.end_time().map(|t| t.timestamp_millis()), Some(1_704_070_800_500));
    assert_eq!(request.groupings().unwrap(), [Grouping::Queue]);
    assert_eq!(request.filters().and_then(|f| f.channels()).unwrap(), [Channel::Voice]);
    assert_eq!(request.max_results(), Some(50));
    assert_eq!(request.next_token(), None);

    let metrics = request.historical_metrics().unwrap();
    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics[0].name(), Some(&HistoricalMetricName::ContactsHandled));
    assert_eq!(metrics[0].statistic(), Some(&Statistic::Sum));
    assert_eq!(metrics[1].unit(), Some(&Unit::Percent));
    assert_eq!(
        metrics[1].threshold().and_then(|t| t.threshold_value()),
        Some(80.0)
    );
}

#[test]
fn metric_request_renders_timestamps_and_doubles() {
    let request: GetMetricDataRequest = serde_json::from_str(
        r#"{"InstanceId":"inst-1","StartTime":1704067200,
            "HistoricalMetrics":[{"Name":"SERVICE_LEVEL","Threshold":{"Comparison":"LT","ThresholdValue":80}}]}"#,
    )
    .unwrap();

    assert_eq!(
        request.to_string(),
        "{InstanceId: inst-1,StartTime: 2024-01-01T00:00:00Z,\
         HistoricalMetrics: [{Name: SERVICE_LEVEL,Threshold: {Comparison: LT,ThresholdValue: 80.0}}]}"
    );
}

#[test]
fn records_survive_a_json_round_trip() {
    let request: GetMetricDataRequest = serde_json::from_str(METRIC_REQUEST).unwrap();
    let encoded = serde_json::to_string(&request).unwrap();
    let decoded: GetMetricDataRequest = serde_json::from_str(&encoded).unwrap();
    assert_eq!(request, decoded);
    assert_eq!(request.hash_code(), decoded.hash_code());
}

#[test]
fn serialization_uses_pascal_case_and_epoch_seconds() {
    let request = GetMetricDataRequest::default()
        .with_instance_id("inst-1")
        .with_start_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .with_groupings([Grouping::Channel]);

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["InstanceId"], "inst-1");
    assert_eq!(value["StartTime"], 1_704_067_200.0);
    assert_eq!(value["Groupings"], json!(["CHANNEL"]));
    assert!(value["EndTime"].is_null());
}

#[test]
fn absent_fields_serialize_as_null() {
    let value = serde_json::to_value(QueueSummary::default().with_name("Sales")).unwrap();
    assert_eq!(
        value,
        json!({ "Id": null, "Arn": null, "Name": "Sales", "QueueType": null })
    );

    let empty: StopContactResult = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, StopContactResult::default());
}

#[test]
fn unknown_enum_values_load_verbatim() {
    let summary: QueueSummary =
        serde_json::from_str(r#"{"Name":"Sales","QueueType":"PRIORITY"}"#).unwrap();
    assert_eq!(summary.queue_type().map(|t| t.as_str()), Some("PRIORITY"));
    assert_eq!(
        serde_json::to_value(&summary).unwrap()["QueueType"],
        "PRIORITY"
    );
}

#[test]
fn v2_results_keep_dimension_maps() {
    let result: GetMetricDataV2Result = serde_json::from_str(
        r#"{"MetricResults":[{"Dimensions":{"QUEUE":"q-1","CHANNEL":"VOICE"},
            "Collections":[{"Metric":{"Name":"AVG_HANDLE_TIME"},"Value":42.5}]}]}"#,
    )
    .unwrap();

    let first = &result.metric_results().unwrap()[0];
    assert_eq!(first.dimensions().unwrap()["QUEUE"], "q-1");
    assert_eq!(first.collections().unwrap()[0].value(), Some(42.5));
    assert_eq!(
        first.to_string(),
        "{Dimensions: {CHANNEL=VOICE, QUEUE=q-1},Collections: [{Metric: {Name: AVG_HANDLE_TIME},Value: 42.5}]}"
    );
}

#[test]
fn every_operation_names_catalog_shapes() {
    let shapes = catalog::shape_names();
    for op in Operation::all() {
        assert!(shapes.contains(&op.request_shape()), "{op}: request shape missing");
        if let Some(result) = op.result_shape() {
            assert!(shapes.contains(&result), "{op}: result shape missing");
        }
    }
}

#[test]
fn catalog_field_names_match_records() {
    assert_eq!(
        catalog::field_names("GetMetricDataRequest").unwrap(),
        GetMetricDataRequest::field_names()
    );
    for shape in catalog::shape_names() {
        let inspection = catalog::inspect(shape, "{}").unwrap();
        assert_eq!(inspection.shape, *shape);
        assert_eq!(inspection.rendered, "{}");
        assert!(inspection.present_fields.is_empty());
        assert_eq!(
            inspection.absent_fields,
            catalog::field_names(shape).unwrap()
        );
    }
}

#[test]
fn sub_millisecond_timestamps_survive_the_wire() {
    let precise = Utc.timestamp_opt(1_704_067_200, 123_456_789).unwrap();
    let request = GetMetricDataRequest::default().with_start_time(precise);

    let start = request.start_time().unwrap();
    assert_eq!(start.timestamp_millis(), 1_704_067_200_123);
    assert_eq!(start.timestamp_subsec_nanos(), 123_000_000);

    let json = serde_json::to_string(&request).unwrap();
    let back: GetMetricDataRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
    assert_eq!(back.hash_code(), request.hash_code());

    let mut set = GetMetricDataRequest::default();
    set.set_start_time(Some(precise));
    assert_eq!(set, request);
}

#[test]
fn current_metric_results_load() {
    let result: GetCurrentMetricDataResult = serde_json::from_str(
        r#"{"MetricResults":[{"Dimensions":{"Queue":{"Id":"q-1"},"Channel":"CHAT"},
            "Collections":[{"Metric":{"Name":"CONTACTS_IN_QUEUE","Unit":"COUNT"},"Value":3}]}],
            "DataSnapshotTime":1704067200}"#,
    )
    .unwrap();

    let first = &result.metric_results().unwrap()[0];
    assert_eq!(first.dimensions().and_then(|d| d.channel()), Some(&Channel::Chat));
    let data = &first.collections().unwrap()[0];
    assert_eq!(
        data.metric().and_then(|m| m.name()),
        Some(&CurrentMetricName::ContactsInQueue)
    );
    assert_eq!(data.value(), Some(3.0));
    assert_eq!(
        result.data_snapshot_time(),
        Some(&Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn hierarchy_group_nests_its_path() {
    let result: DescribeUserHierarchyGroupResult = serde_json::from_str(
        r#"{"HierarchyGroup":{"Id":"hg-3","Name":"Team A","LevelId":"3",
            "HierarchyPath":{"LevelOne":{"Id":"hg-1","Name":"EMEA"},"LevelTwo":{"Id":"hg-2","Name":"Sales"}}}}"#,
    )
    .unwrap();

    let group = result.hierarchy_group().unwrap();
    let path = group.hierarchy_path().unwrap();
    assert_eq!(path.level_two().and_then(|g| g.name()), Some("Sales"));
    assert!(path.level_three().is_none());
    assert_eq!(
        group.to_string(),
        "{Id: hg-3,Name: Team A,LevelId: 3,HierarchyPath: {LevelOne: {Id: hg-1,Name: EMEA},LevelTwo: {Id: hg-2,Name: Sales}}}"
    );
}

#[test]
fn routing_profile_update_has_no_result() {
    let op: Operation = "UpdateUserRoutingProfile".parse().unwrap();
    assert_eq!(op.request_shape(), UpdateUserRoutingProfileRequest::SHAPE);
    assert_eq!(op.result_shape(), None);

    let request = UpdateUserRoutingProfileRequest::default()
        .with_routing_profile_id("rp-2")
        .with_user_id("u-1")
        .with_instance_id("inst-1");
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"RoutingProfileId": "rp-2", "UserId": "u-1", "InstanceId": "inst-1"})
    );
}
