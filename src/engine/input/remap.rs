// Per-player input services provided by the host
//
// The settings never own a player. The host hands in a `LocalPlayer` for
// every apply/rebind call and the settings push bindings through whichever
// services that player exposes. A missing service is not an error.

use super::action::InputSource;
use super::name::{MappingName, Name};
use std::collections::HashMap;

/// Runtime key remapping for one player
pub trait KeyRemapper {
    /// Bind `key` to the mapping, replacing any earlier remap
    fn add_player_mapped_key(&mut self, mapping_name: &MappingName, key: InputSource);

    /// Drop the remap for one mapping, falling back to the config default
    fn remove_player_mapped_key(&mut self, mapping_name: &MappingName);

    /// Drop every remap
    fn remove_all_player_mapped_keys(&mut self);
}

/// Selects which gamepad layout/glyph set a player uses
pub trait GamepadTypeSelector {
    fn set_gamepad_input_type(&mut self, platform: &Name);
}

/// A local player as seen by the settings
pub trait LocalPlayer {
    fn player_id(&self) -> usize;

    fn key_remapper(&mut self) -> Option<&mut dyn KeyRemapper>;

    fn gamepad_selector(&mut self) -> Option<&mut dyn GamepadTypeSelector>;
}

/// In-memory key remapping table for one player
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlayerMappedKeys {
    mapped_keys: HashMap<MappingName, InputSource>,
}

impl PlayerMappedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the remapped key for a mapping, if any
    pub fn mapped_key(&self, mapping_name: &MappingName) -> Option<InputSource> {
        self.mapped_keys.get(mapping_name).copied()
    }

    pub fn len(&self) -> usize {
        self.mapped_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapped_keys.is_empty()
    }
}

impl KeyRemapper for PlayerMappedKeys {
    fn add_player_mapped_key(&mut self, mapping_name: &MappingName, key: InputSource) {
        self.mapped_keys.insert(mapping_name.clone(), key);
    }

    fn remove_player_mapped_key(&mut self, mapping_name: &MappingName) {
        self.mapped_keys.remove(mapping_name);
    }

    fn remove_all_player_mapped_keys(&mut self) {
        self.mapped_keys.clear();
    }
}

/// Current gamepad type of one player
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GamepadInputType {
    platform: Name,
}

impl GamepadInputType {
    pub fn platform(&self) -> &Name {
        &self.platform
    }
}

impl GamepadTypeSelector for GamepadInputType {
    fn set_gamepad_input_type(&mut self, platform: &Name) {
        self.platform = platform.clone();
    }
}

/// A local player backed by the in-memory services
#[derive(Debug, Clone)]
pub struct PlayerContext {
    player_id: usize,
    mapped_keys: Option<PlayerMappedKeys>,
    gamepad: Option<GamepadInputType>,
}

impl PlayerContext {
    /// Create a player with both services available
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            mapped_keys: Some(PlayerMappedKeys::new()),
            gamepad: Some(GamepadInputType::default()),
        }
    }

    /// Remove the key remapping service
    pub fn without_remapper(mut self) -> Self {
        self.mapped_keys = None;
        self
    }

    /// Remove the gamepad type service
    pub fn without_gamepad_selector(mut self) -> Self {
        self.gamepad = None;
        self
    }

    pub fn mapped_keys(&self) -> Option<&PlayerMappedKeys> {
        self.mapped_keys.as_ref()
    }

    pub fn gamepad(&self) -> Option<&GamepadInputType> {
        self.gamepad.as_ref()
    }
}

impl LocalPlayer for PlayerContext {
    fn player_id(&self) -> usize {
        self.player_id
    }

    fn key_remapper(&mut self) -> Option<&mut dyn KeyRemapper> {
        self.mapped_keys
            .as_mut()
            .map(|keys| keys as &mut dyn KeyRemapper)
    }

    fn gamepad_selector(&mut self) -> Option<&mut dyn GamepadTypeSelector> {
        self.gamepad
            .as_mut()
            .map(|gamepad| gamepad as &mut dyn GamepadTypeSelector)
    }
}
