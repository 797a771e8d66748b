// Input settings: controller platform and custom keyboard bindings

use super::persistence::{SavedInputSettings, SettingsStore};
use super::SettingsError;
use crate::engine::input::{
    ConfigRegistry, InputConfig, InputSource, InputType, InputTypeFilter, LoadedInputConfig,
    LocalPlayer, MappingName, Name, DEFAULT_CONFIG_NAME,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Which keyboard bindings the player is using
///
/// Moves from `Default` to `Custom` the first time a binding is customized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveConfig {
    #[default]
    Default,
    Custom,
}

impl fmt::Display for ActiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveConfig::Default => f.write_str("Default"),
            ActiveConfig::Custom => f.write_str("Custom"),
        }
    }
}

fn change_value_and_dirty<T: PartialEq>(value: &mut T, new_value: T, dirty: &mut bool) {
    if *value != new_value {
        *value = new_value;
        *dirty = true;
    }
}

/// Holds user key bindings and controller settings
#[derive(Debug)]
pub struct InputSettings {
    /// Configs available to the player
    registry: ConfigRegistry,

    controller_platform: Name,
    controller_preset: Name,

    /// `Custom` once any keyboard binding has been customized
    active_config: ActiveConfig,

    /// Mapping name -> key overrides, layered over config defaults
    custom_keyboard_config: BTreeMap<MappingName, InputSource>,

    /// Set when there are changes not yet saved
    dirty: bool,
}

impl InputSettings {
    /// Create settings with default values and an empty registry
    pub fn new() -> Self {
        Self::from_saved(SavedInputSettings::default())
    }

    /// Restore settings from their persisted form
    pub fn from_saved(saved: SavedInputSettings) -> Self {
        Self {
            registry: ConfigRegistry::new(),
            controller_platform: saved.controller_platform,
            controller_preset: saved.controller_preset,
            active_config: saved.input_config_name,
            custom_keyboard_config: saved.custom_keyboard_config,
            dirty: false,
        }
    }

    /// Snapshot the persisted part of the settings
    pub fn to_saved(&self) -> SavedInputSettings {
        SavedInputSettings {
            controller_platform: self.controller_platform.clone(),
            controller_preset: self.controller_preset.clone(),
            input_config_name: self.active_config,
            custom_keyboard_config: self.custom_keyboard_config.clone(),
        }
    }

    /// Load settings from the store, falling back to defaults if the file
    /// can't be read
    pub fn load_or_default(store: &SettingsStore) -> Self {
        match store.load() {
            Ok(saved) => Self::from_saved(saved),
            Err(e) => {
                warn!("Could not load input settings: {}; using defaults", e);
                Self::new()
            }
        }
    }

    /// Save settings to the store and clear the dirty flag
    pub fn save_to(&mut self, store: &SettingsStore) -> Result<(), SettingsError> {
        store.save(&self.to_saved())?;
        self.dirty = false;
        Ok(())
    }

    /// Reset every persisted value. Registered configs are kept.
    pub fn set_to_defaults(&mut self) {
        let defaults = SavedInputSettings::default();
        self.controller_platform = defaults.controller_platform;
        self.controller_preset = defaults.controller_preset;
        self.active_config = defaults.input_config_name;
        self.custom_keyboard_config = defaults.custom_keyboard_config;
        self.dirty = true;
    }

    /// Push controller platform and custom bindings to every player
    pub fn apply_settings<P: LocalPlayer>(&self, players: &mut [P]) {
        for player in players.iter_mut() {
            self.apply_controller_platform(player);
            self.apply_custom_bindings(player);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // =========================================
    //  Controller Settings
    // =========================================

    pub fn controller_platform(&self) -> &Name {
        &self.controller_platform
    }

    pub fn set_controller_platform(&mut self, platform: impl Into<Name>) {
        change_value_and_dirty(&mut self.controller_platform, platform.into(), &mut self.dirty);
    }

    pub fn controller_preset(&self) -> &Name {
        &self.controller_preset
    }

    pub fn set_controller_preset(&mut self, preset: impl Into<Name>) {
        change_value_and_dirty(&mut self.controller_preset, preset.into(), &mut self.dirty);
    }

    /// Forward the controller platform to the player's gamepad service
    pub fn apply_controller_platform(&self, player: &mut dyn LocalPlayer) {
        let player_id = player.player_id();
        match player.gamepad_selector() {
            Some(selector) => selector.set_gamepad_input_type(&self.controller_platform),
            None => debug!(
                "Player {} has no gamepad type service, skipping platform",
                player_id
            ),
        }
    }

    // =========================================
    //  Config Registry
    // =========================================

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    /// Mutable registry access, for subscribing to notifications
    pub fn registry_mut(&mut self) -> &mut ConfigRegistry {
        &mut self.registry
    }

    /// Register a config so it becomes available to the player
    pub fn register_input_config(
        &mut self,
        input_type: InputType,
        config: Arc<InputConfig>,
        is_active: bool,
    ) {
        self.registry.register(config, input_type, is_active);
    }

    /// Unregister a config. Returns the number of configs removed, or `None`.
    pub fn unregister_input_config(&mut self, config: &Arc<InputConfig>) -> Option<usize> {
        self.registry.unregister(config)
    }

    /// Get all registered configs matching the filter
    pub fn registered_configs_of_type(
        &self,
        filter: impl Into<InputTypeFilter>,
    ) -> Vec<LoadedInputConfig> {
        self.registry.configs_of_type(filter)
    }

    /// Get a registered config by name
    pub fn input_config_by_name(&self, name: &Name) -> Option<Arc<InputConfig>> {
        self.registry.find_by_name(name)
    }

    /// Activate or deactivate a registered config
    pub fn set_input_config_active(&mut self, config: &Arc<InputConfig>, active: bool) -> bool {
        self.registry.set_active(config, active)
    }

    // =========================================
    //  Keybind Settings
    // =========================================

    pub fn active_config(&self) -> ActiveConfig {
        self.active_config
    }

    pub fn custom_bindings(&self) -> &BTreeMap<MappingName, InputSource> {
        &self.custom_keyboard_config
    }

    fn keyboard_configs(&self) -> impl Iterator<Item = &LoadedInputConfig> {
        self.registry
            .entries()
            .iter()
            .filter(|entry| entry.input_type == InputType::MouseAndKeyboard)
    }

    /// Display names of every keyboard mapping whose effective key is `key`
    pub fn mapping_names_for_key(&self, key: InputSource) -> Vec<String> {
        if !key.is_valid() {
            return Vec::new();
        }

        let mut names = Vec::new();
        for entry in self.keyboard_configs() {
            for mapping in entry.config.player_mappable_keys() {
                // A custom binding hides the config default
                let bound = self
                    .custom_keyboard_config
                    .get(&mapping.name)
                    .copied()
                    .unwrap_or(mapping.key);

                if bound == key {
                    names.push(mapping.display_name.clone());
                }
            }
        }
        names
    }

    /// The key a keyboard mapping currently resolves to
    pub fn effective_key(&self, mapping_name: &MappingName) -> InputSource {
        if let Some(key) = self.custom_keyboard_config.get(mapping_name) {
            return *key;
        }

        self.keyboard_configs()
            .find_map(|entry| entry.config.default_key(mapping_name))
            .unwrap_or_default()
    }

    /// Bind a keyboard mapping to a new key
    ///
    /// The first customization copies every binding of the `"Default"` config
    /// into the custom bindings, so later saves hold a complete layout.
    pub fn add_or_update_custom_binding(
        &mut self,
        mapping_name: &MappingName,
        new_key: InputSource,
        player: &mut dyn LocalPlayer,
    ) {
        if mapping_name.is_none() {
            return;
        }

        if self.active_config != ActiveConfig::Custom {
            let default_name = Name::from(DEFAULT_CONFIG_NAME);
            if let Some(default_config) = self.registry.find_by_name(&default_name) {
                for mapping in default_config.player_mappable_keys() {
                    if !mapping.name.is_none() {
                        self.custom_keyboard_config
                            .insert(mapping.name.clone(), mapping.key);
                    }
                }
            }

            info!("Input config switched to {}", ActiveConfig::Custom);
            self.active_config = ActiveConfig::Custom;
        }

        self.custom_keyboard_config
            .insert(mapping_name.clone(), new_key);

        let player_id = player.player_id();
        match player.key_remapper() {
            Some(remapper) => remapper.add_player_mapped_key(mapping_name, new_key),
            None => debug!(
                "Player {} has no key remapper, '{}' will apply later",
                player_id, mapping_name
            ),
        }

        self.dirty = true;
    }

    /// Revert one mapping to its config default on the player
    ///
    /// The custom binding itself is kept.
    pub fn reset_binding_to_default(&self, mapping_name: &MappingName, player: &mut dyn LocalPlayer) {
        if let Some(remapper) = player.key_remapper() {
            remapper.remove_player_mapped_key(mapping_name);
        }
    }

    /// Revert every mapping to its config default on the player
    ///
    /// Custom bindings are kept.
    pub fn reset_bindings_to_default(&self, player: &mut dyn LocalPlayer) {
        if let Some(remapper) = player.key_remapper() {
            remapper.remove_all_player_mapped_keys();
        }
    }

    /// Push every custom binding to the player
    pub fn apply_custom_bindings(&self, player: &mut dyn LocalPlayer) {
        let player_id = player.player_id();
        let Some(remapper) = player.key_remapper() else {
            debug!("Player {} has no key remapper, skipping bindings", player_id);
            return;
        };

        for (name, key) in &self.custom_keyboard_config {
            remapper.add_player_mapped_key(name, *key);
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self::new()
    }
}
