// Registry of input configs available to the player

use super::config::{InputConfig, InputType, InputTypeFilter};
use super::events::ConfigDelegate;
use super::name::Name;
use log::debug;
use std::sync::Arc;

/// A registered config together with its device class and active flag
#[derive(Debug, Clone)]
pub struct LoadedInputConfig {
    pub config: Arc<InputConfig>,
    pub input_type: InputType,
    pub is_active: bool,
}

impl LoadedInputConfig {
    pub fn new(config: Arc<InputConfig>, input_type: InputType, is_active: bool) -> Self {
        Self {
            config,
            input_type,
            is_active,
        }
    }
}

/// Ordered set of registered configs, unique by reference identity
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    entries: Vec<LoadedInputConfig>,

    /// Called after a new config has been registered
    pub on_registered: ConfigDelegate,

    /// Called when a registered config becomes active
    pub on_activated: ConfigDelegate,

    /// Called when a registered config becomes inactive
    pub on_deactivated: ConfigDelegate,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(&self, config: &Arc<InputConfig>) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| Arc::ptr_eq(&entry.config, config))
    }

    /// Register a config. Registering the same `Arc` twice is a no-op.
    pub fn register(&mut self, config: Arc<InputConfig>, input_type: InputType, is_active: bool) {
        if self.index_of(&config).is_some() {
            debug!(
                "Input config '{}' already registered, ignoring",
                config.config_name()
            );
            return;
        }

        debug!(
            "Registering input config '{}' ({:?}, active: {})",
            config.config_name(),
            input_type,
            is_active
        );
        self.entries
            .push(LoadedInputConfig::new(config, input_type, is_active));

        let index = self.entries.len() - 1;
        self.on_registered.broadcast(&self.entries[index]);
    }

    /// Unregister a config. Returns the number of configs removed, or `None`
    /// if the config was never registered.
    pub fn unregister(&mut self, config: &Arc<InputConfig>) -> Option<usize> {
        let index = self.index_of(config)?;
        let removed = self.entries.remove(index);
        debug!(
            "Unregistered input config '{}'",
            removed.config.config_name()
        );
        Some(1)
    }

    /// Get all registered configs matching the filter, in registration order
    pub fn configs_of_type(&self, filter: impl Into<InputTypeFilter>) -> Vec<LoadedInputConfig> {
        let filter = filter.into();
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry.input_type))
            .cloned()
            .collect()
    }

    /// Get the first registered config with the given name
    pub fn find_by_name(&self, name: &Name) -> Option<Arc<InputConfig>> {
        self.entries
            .iter()
            .find(|entry| entry.config.config_name() == name)
            .map(|entry| Arc::clone(&entry.config))
    }

    /// Set the active flag of a registered config, notifying subscribers
    /// when it changes. Returns false if the config is not registered.
    pub fn set_active(&mut self, config: &Arc<InputConfig>, active: bool) -> bool {
        let Some(index) = self.index_of(config) else {
            return false;
        };

        if self.entries[index].is_active == active {
            return true;
        }

        self.entries[index].is_active = active;
        let entry = &self.entries[index];
        if active {
            self.on_activated.broadcast(entry);
        } else {
            self.on_deactivated.broadcast(entry);
        }
        true
    }

    /// Get all registered configs
    pub fn entries(&self) -> &[LoadedInputConfig] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
