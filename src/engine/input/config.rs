// Input mapping configurations
//
// An `InputConfig` is an immutable, named set of default action -> key
// mappings for one class of input device. Configs are built by the host's
// loader and shared with the settings through `Arc`.

use super::action::{self, Action, InputSource};
use super::name::{MappingName, Name};
use std::sync::Arc;

/// Name of the config that seeds custom keyboard bindings
pub const DEFAULT_CONFIG_NAME: &str = "Default";

/// Name of the built-in gamepad config
pub const GAMEPAD_CONFIG_NAME: &str = "Gamepad";

/// Device class a config applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    MouseAndKeyboard,
    Gamepad,
    Touch,
}

/// Category filter for registry queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTypeFilter {
    /// Matches every category
    Any,
    Only(InputType),
}

impl InputTypeFilter {
    pub fn matches(&self, input_type: InputType) -> bool {
        match self {
            InputTypeFilter::Any => true,
            InputTypeFilter::Only(t) => *t == input_type,
        }
    }
}

impl From<InputType> for InputTypeFilter {
    fn from(input_type: InputType) -> Self {
        InputTypeFilter::Only(input_type)
    }
}

/// A single player-mappable binding inside a config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMappableKey {
    /// Mapping name used for overrides, may be the none sentinel
    pub name: MappingName,

    /// Name shown to the player
    pub display_name: String,

    /// Key bound by default
    pub key: InputSource,
}

impl PlayerMappableKey {
    pub fn new(name: impl Into<MappingName>, display_name: impl Into<String>, key: InputSource) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            key,
        }
    }

    /// Build the mappable key for a built-in action
    pub fn from_action(action: Action, key: InputSource) -> Self {
        Self::new(action.mapping_name(), action.display_name(), key)
    }
}

/// Immutable named collection of default mappings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    name: Name,
    mappings: Vec<PlayerMappableKey>,
}

impl InputConfig {
    /// Create a new input config
    pub fn new(name: impl Into<Name>, mappings: Vec<PlayerMappableKey>) -> Self {
        Self {
            name: name.into(),
            mappings,
        }
    }

    /// Create a config from `(source, action)` pairs
    pub fn from_bindings(name: impl Into<Name>, bindings: Vec<(InputSource, Action)>) -> Self {
        let mappings = bindings
            .into_iter()
            .map(|(source, action)| PlayerMappableKey::from_action(action, source))
            .collect();
        Self::new(name, mappings)
    }

    /// Get the config name
    pub fn config_name(&self) -> &Name {
        &self.name
    }

    /// Get all mappings in declaration order
    pub fn player_mappable_keys(&self) -> &[PlayerMappableKey] {
        &self.mappings
    }

    /// Get the default key for a mapping name
    pub fn default_key(&self, mapping_name: &MappingName) -> Option<InputSource> {
        self.mappings
            .iter()
            .find(|m| &m.name == mapping_name)
            .map(|m| m.key)
    }
}

/// The built-in mouse-and-keyboard config, named `"Default"`
pub fn default_keyboard_config() -> Arc<InputConfig> {
    Arc::new(InputConfig::from_bindings(
        DEFAULT_CONFIG_NAME,
        action::default_keyboard_bindings(),
    ))
}

/// The built-in gamepad config
pub fn default_gamepad_config() -> Arc<InputConfig> {
    Arc::new(InputConfig::from_bindings(
        GAMEPAD_CONFIG_NAME,
        action::default_gamepad_bindings(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_config_creation() {
        let config = InputConfig::new(
            "Arena",
            vec![PlayerMappableKey::new(
                "Jump",
                "Jump",
                InputSource::key(KeyCode::Space),
            )],
        );

        assert_eq!(config.config_name(), "Arena");
        assert_eq!(config.player_mappable_keys().len(), 1);
    }

    #[test]
    fn test_default_key_lookup() {
        let config = default_keyboard_config();

        assert_eq!(
            config.default_key(&Action::MoveLeft.mapping_name()),
            Some(InputSource::key(KeyCode::KeyA))
        );
        assert_eq!(config.default_key(&MappingName::from("Sprint")), None);
    }

    #[test]
    fn test_from_bindings_keeps_order() {
        let config = InputConfig::from_bindings(
            "Test",
            vec![
                (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
                (InputSource::key(KeyCode::KeyD), Action::MoveRight),
            ],
        );

        let names: Vec<_> = config
            .player_mappable_keys()
            .iter()
            .map(|m| m.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Move Left", "Move Right"]);
    }

    #[test]
    fn test_builtin_config_names() {
        assert_eq!(default_keyboard_config().config_name(), DEFAULT_CONFIG_NAME);
        assert_eq!(default_gamepad_config().config_name(), GAMEPAD_CONFIG_NAME);
    }

    #[test]
    fn test_filter_matches() {
        assert!(InputTypeFilter::Any.matches(InputType::Touch));
        assert!(InputTypeFilter::from(InputType::Gamepad).matches(InputType::Gamepad));
        assert!(!InputTypeFilter::from(InputType::Gamepad).matches(InputType::MouseAndKeyboard));
    }
}
