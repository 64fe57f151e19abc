//! Key-value store holding the game state shared between scenes.
//!
//! The store maps names to loosely typed [`Value`]s. Scenes read and write it through the game
//! manager; the main loop reads the `running` and `current_scene` keys after every frame.

use std::collections::BTreeMap;

use color_eyre::eyre::{eyre, OptionExt as _, Result};

use crate::types::SceneType;

/// Key of the player's score.
pub(crate) const SCORE: &str = "score";
/// Key of the player's health.
pub(crate) const HEALTH: &str = "health";
/// Key of the scene the main loop should display.
pub(crate) const CURRENT_SCENE: &str = "current_scene";
/// Key of the flag keeping the main loop alive.
pub(crate) const RUNNING: &str = "running";

/// Score a new game starts with unless configured otherwise.
pub(crate) const DEFAULT_SCORE: i64 = 0;
/// Health a new game starts with unless configured otherwise.
pub(crate) const DEFAULT_HEALTH: i64 = 100;

/// A single entry of the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Value {
    /// Integer value.
    ///
    /// This variant represents counters such as the score and the health.
    Int(i64),
    /// Boolean flag.
    ///
    /// This variant represents switches such as the `running` flag.
    Bool(bool),
    /// Reference to one of the game's scenes.
    ///
    /// This variant represents the scene stored under the `current_scene` key.
    Scene(SceneType),
    /// Free-form text.
    ///
    /// This variant represents any other value a scene wants to share.
    Text(String),
}

impl Value {
    /// Returns the integer held by the value, if any.
    pub(crate) const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the flag held by the value, if any.
    pub(crate) const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the scene held by the value, if any.
    pub(crate) const fn as_scene(&self) -> Option<SceneType> {
        match self {
            Self::Scene(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<SceneType> for Value {
    fn from(value: SceneType) -> Self {
        Self::Scene(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Game state container.
///
/// This structure holds every named value of the game state in key order. It remembers the score
/// and health a game starts with so that [`reset`](Store::reset) can restore them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Store {
    /// Stored values, keyed by name.
    ///
    /// This field holds every entry of the game state, ordered by key.
    values: BTreeMap<String, Value>,
    /// Score of a new game.
    ///
    /// This field holds the score restored by [`reset`](Store::reset).
    initial_score: i64,
    /// Health of a new game.
    ///
    /// This field holds the health restored by [`reset`](Store::reset).
    initial_health: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE, DEFAULT_HEALTH)
    }
}

impl Store {
    /// Creates a store holding the initial game state.
    ///
    /// The store starts with the given score and health, the main menu as the current scene and
    /// the running flag set.
    pub(crate) fn new(score: i64, health: i64) -> Self {
        let mut store = Self {
            values: BTreeMap::new(),
            initial_score: score,
            initial_health: health,
        };
        store.set(SCORE, score);
        store.set(HEALTH, health);
        store.set(CURRENT_SCENE, SceneType::Menu);
        store.set(RUNNING, true);

        store
    }

    /// Retrieves the value stored under `key`.
    ///
    /// # Errors
    ///
    /// This function returns an error naming the key and listing the available keys if nothing is
    /// stored under `key`.
    pub(crate) fn get(&self, key: &str) -> Result<&Value> {
        self.values.get(key).ok_or_else(|| {
            eyre!(
                "game state key '{key}' not found, available keys: {:?}",
                self.keys()
            )
        })
    }

    /// Retrieves the value stored under `key`, or `default` if there is none.
    pub(crate) fn get_or(&self, key: &str, default: Value) -> Value {
        self.values.get(key).cloned().unwrap_or(default)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub(crate) fn set<V: Into<Value>>(&mut self, key: &str, value: V) {
        let _ = self.values.insert(key.to_owned(), value.into());
    }

    /// Returns the available keys in sorted order.
    pub(crate) fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// Restores the score and health the store was created with.
    ///
    /// Every other key keeps its current value.
    pub(crate) fn reset(&mut self) {
        self.set(SCORE, self.initial_score);
        self.set(HEALTH, self.initial_health);
    }

    /// Returns whether the main loop should keep running.
    ///
    /// A missing or non-boolean `running` entry counts as running.
    pub(crate) fn running(&self) -> bool {
        self.get_or(RUNNING, Value::Bool(true))
            .as_bool()
            .unwrap_or(true)
    }

    /// Returns the scene the main loop should display, defaulting to the main menu.
    pub(crate) fn current_scene(&self) -> SceneType {
        self.values
            .get(CURRENT_SCENE)
            .and_then(Value::as_scene)
            .unwrap_or(SceneType::Menu)
    }

    /// Returns the current score.
    ///
    /// # Errors
    ///
    /// This function returns an error if the score is missing or not an integer.
    pub(crate) fn score(&self) -> Result<i64> {
        self.get(SCORE)?
            .as_int()
            .ok_or_eyre("game state score is not an integer")
    }

    /// Returns the current health.
    ///
    /// # Errors
    ///
    /// This function returns an error if the health is missing or not an integer.
    pub(crate) fn health(&self) -> Result<i64> {
        self.get(HEALTH)?
            .as_int()
            .ok_or_eyre("game state health is not an integer")
    }
}
