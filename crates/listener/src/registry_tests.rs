use std::sync::Arc;

use super::*;
use crate::test_support::RecordingPoster;

fn trigger(name: &str) -> EventGridTrigger {
    EventGridTrigger::with_name(
        FunctionName::new(name).unwrap(),
        Arc::new(RecordingPoster::disabled()),
    )
}

#[test]
fn test_empty_registry() {
    let registry = FunctionRegistry::new();
    assert!(registry.is_empty());
    assert!(registry
        .get(&FunctionName::new("EventGridTrigger").unwrap())
        .is_none());
}

#[test]
fn test_lookup_is_case_insensitive() {
    let mut registry = FunctionRegistry::new();
    registry.register(trigger("EventGridTrigger"));

    let found = registry
        .get(&FunctionName::new("eventgridtrigger").unwrap())
        .unwrap();
    assert_eq!(found.name().as_str(), "EventGridTrigger");
}

#[test]
fn test_register_replaces_same_name() {
    let mut registry = FunctionRegistry::new();
    assert!(registry.register(trigger("Relay")).is_none());
    assert!(registry.register(trigger("RELAY")).is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_names_are_sorted() {
    let mut registry = FunctionRegistry::new();
    registry.register(trigger("Zeta"));
    registry.register(trigger("Alpha"));

    let names: Vec<_> = registry.names().into_iter().map(FunctionName::as_str).collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);
}
