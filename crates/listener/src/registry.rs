//! Function registry.

use std::collections::HashMap;

use relay::{EventGridTrigger, FunctionName};

/// The triggers the listener can invoke, keyed case-insensitively by name.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, EventGridTrigger>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `trigger` under its own name, returning any trigger it replaced.
    pub fn register(&mut self, trigger: EventGridTrigger) -> Option<EventGridTrigger> {
        self.functions.insert(trigger.name().key(), trigger)
    }

    /// Looks up a trigger by name.
    pub fn get(&self, name: &FunctionName) -> Option<&EventGridTrigger> {
        self.functions.get(&name.key())
    }

    /// Registered function names, sorted.
    pub fn names(&self) -> Vec<&FunctionName> {
        let mut names: Vec<_> = self.functions.values().map(EventGridTrigger::name).collect();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        names
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if no function is registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
