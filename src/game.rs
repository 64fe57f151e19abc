//! Game manager shared by every scene.

use crate::{state::Store, systems::Registry};

/// Owner of the game state and the system registry.
///
/// Scenes receive the manager on every event, update and render call; it is the only channel
/// through which a scene affects the rest of the game.
#[derive(Default)]
pub(crate) struct Manager {
    /// Named game values.
    ///
    /// This field holds the key-value game state read and written by the scenes.
    state: Store,
    /// Registered game systems.
    ///
    /// This field holds the long-lived services scenes look up by name, such as the configuration.
    systems: Registry,
}

impl Manager {
    /// Creates a manager around an initial game state and an empty registry.
    pub(crate) fn new(state: Store) -> Self {
        Self {
            state,
            systems: Registry::default(),
        }
    }

    /// Returns the game state.
    pub(crate) const fn state(&self) -> &Store {
        &self.state
    }

    /// Returns the game state for writing.
    pub(crate) fn state_mut(&mut self) -> &mut Store {
        &mut self.state
    }

    /// Returns the system registry.
    pub(crate) const fn systems(&self) -> &Registry {
        &self.systems
    }

    /// Returns the system registry for writing.
    pub(crate) fn systems_mut(&mut self) -> &mut Registry {
        &mut self.systems
    }
}
