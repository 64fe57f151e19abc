//! Registry of game systems.
//!
//! Systems are long-lived services (configuration, and later gameplay mechanics) looked up by
//! name. Each name holds at most one instance.

use std::{any::Any, collections::BTreeMap};

use tracing::{debug, warn};

/// Name under which the application registers its [`Config`](crate::config::Config).
pub(crate) const CONFIG: &str = "config";

/// Service locator keeping one instance per system name.
#[derive(Default)]
pub(crate) struct Registry {
    /// Registered systems, keyed by name.
    ///
    /// This field holds one boxed instance per name; lookups downcast it back to its type.
    systems: BTreeMap<String, Box<dyn Any>>,
}

impl Registry {
    /// Registers `system` under `name`.
    ///
    /// A system already registered under the same name is dropped and replaced.
    pub(crate) fn register<T: Any>(&mut self, name: &str, system: T) {
        if self
            .systems
            .insert(name.to_owned(), Box::new(system))
            .is_some()
        {
            warn!(name, "replaced a previously registered system");
        } else {
            debug!(name, "registered system");
        }
    }

    /// Returns the system registered under `name`, if it exists and has type `T`.
    pub(crate) fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.systems.get(name)?.downcast_ref()
    }

    /// Returns the registered names in sorted order.
    pub(crate) fn names(&self) -> Vec<&str> {
        self.systems.keys().map(String::as_str).collect()
    }
}
