use serde_json::json;

use super::*;

#[test]
fn test_deserialises_full_envelope() {
    let event: EventGridEvent = serde_json::from_value(json!({
        "id": "831e1650-001e-001b-66ab-eeb76e069631",
        "topic": "/subscriptions/0000/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/acct",
        "subject": "/blobServices/default/containers/images/blobs/cat.png",
        "eventType": "Microsoft.Storage.BlobCreated",
        "eventTime": "2017-06-26T18:41:00.9584103Z",
        "data": {"api": "PutBlockList", "contentLength": 524288},
        "dataVersion": "2.0",
        "metadataVersion": "1"
    }))
    .unwrap();

    assert_eq!(event.id, "831e1650-001e-001b-66ab-eeb76e069631");
    assert_eq!(event.event_type, "Microsoft.Storage.BlobCreated");
    assert_eq!(event.data["api"], "PutBlockList");
    assert_eq!(event.data_version.as_deref(), Some("2.0"));
    assert!(event.event_time.is_some());
    assert!(!event.is_subscription_validation());
}

#[test]
fn test_sparse_envelope_defaults() {
    let event: EventGridEvent = serde_json::from_value(json!({"data": "x"})).unwrap();
    assert_eq!(event.id, "");
    assert_eq!(event.data, json!("x"));
    assert!(event.topic.is_none());
}

#[test]
fn test_null_string_fields_default_to_empty() {
    let event: EventGridEvent = serde_json::from_value(json!({
        "id": null,
        "subject": null,
        "eventType": null,
        "data": {"foo": "bar"}
    }))
    .unwrap();

    assert_eq!(event.id, "");
    assert_eq!(event.subject, "");
    assert_eq!(event.event_type, "");
    assert_eq!(event.data, json!({"foo": "bar"}));
}

#[test]
fn test_unparseable_event_time_is_dropped() {
    for event_time in [json!(""), json!("not a time"), json!(1714566600), json!(null)] {
        let event: EventGridEvent = serde_json::from_value(json!({
            "id": "1",
            "eventTime": event_time,
            "data": "x"
        }))
        .unwrap();

        assert!(event.event_time.is_none(), "eventTime {event_time} should be ignored");
        assert_eq!(event.data, json!("x"));
    }
}

#[test]
fn test_missing_data_is_null() {
    let event: EventGridEvent = serde_json::from_value(json!({"id": "1"})).unwrap();
    assert_eq!(event.data, Value::Null);
}

#[test]
fn test_subscription_validation_code() {
    let event = EventGridEvent::new(
        "2d1781af-3a4c-4d7c-bd0c-e34b19da4e66",
        SUBSCRIPTION_VALIDATION_EVENT_TYPE,
        json!({"validationCode": "512d38b6-c7b8-40c8-89fe-f46f9e9622b6"}),
    );

    assert!(event.is_subscription_validation());
    assert_eq!(
        event.validation_code(),
        Some("512d38b6-c7b8-40c8-89fe-f46f9e9622b6")
    );
}

#[test]
fn test_validation_code_absent_for_other_events() {
    let event = EventGridEvent::new("1", "Custom.Event", json!({"foo": "bar"}));
    assert_eq!(event.validation_code(), None);
}

#[test]
fn test_serialisation_uses_camel_case_and_skips_absent_fields() {
    let event = EventGridEvent::new("1", "Custom.Event", json!(1));
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["eventType"], "Custom.Event");
    assert!(value.get("topic").is_none());
    assert!(value.get("eventTime").is_none());
}
