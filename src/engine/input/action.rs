// Game action definitions and default key bindings

use super::name::MappingName;
use serde::{Deserialize, Serialize};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all player-mappable in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,
    Duck,

    // Abilities (3 slots)
    Ability1,
    Ability2,
    Ability3,

    // Meta actions
    Pause,
    Menu,
}

impl Action {
    /// Every action, in menu order
    pub const ALL: [Action; 9] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Duck,
        Action::Ability1,
        Action::Ability2,
        Action::Ability3,
        Action::Pause,
        Action::Menu,
    ];

    /// Stable mapping name used as the key of custom bindings
    pub fn mapping_name(&self) -> MappingName {
        let name = match self {
            Action::MoveLeft => "MoveLeft",
            Action::MoveRight => "MoveRight",
            Action::Jump => "Jump",
            Action::Duck => "Duck",
            Action::Ability1 => "Ability1",
            Action::Ability2 => "Ability2",
            Action::Ability3 => "Ability3",
            Action::Pause => "Pause",
            Action::Menu => "Menu",
        };
        MappingName::from(name)
    }

    /// Human readable name shown in the keybinding menu
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::MoveLeft => "Move Left",
            Action::MoveRight => "Move Right",
            Action::Jump => "Jump",
            Action::Duck => "Duck",
            Action::Ability1 => "Primary Ability",
            Action::Ability2 => "Secondary Ability",
            Action::Ability3 => "Ultimate Ability",
            Action::Pause => "Pause",
            Action::Menu => "Menu",
        }
    }
}

/// Gamepad buttons, named by position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamepadButton {
    FaceBottom,
    FaceRight,
    FaceLeft,
    FaceTop,
    LeftShoulder,
    RightShoulder,
    DPadLeft,
    DPadRight,
    DPadDown,
    Start,
    Select,
}

/// Represents a physical input (keyboard key, mouse button or gamepad button)
///
/// `Invalid` is the "no key" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSource {
    #[default]
    Invalid,
    Keyboard(KeyCode),
    Mouse(MouseButton),
    Gamepad(GamepadButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }

    /// Create a gamepad button input source
    pub fn gamepad(button: GamepadButton) -> Self {
        Self::Gamepad(button)
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Default keyboard/mouse bindings
pub fn default_keyboard_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (WASD - standard gaming layout)
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::KeyS), Action::Duck),
        // Abilities (mouse buttons)
        (InputSource::mouse(MouseButton::Left), Action::Ability1),
        (InputSource::mouse(MouseButton::Right), Action::Ability2),
        (InputSource::mouse(MouseButton::Middle), Action::Ability3),
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::Escape), Action::Menu),
    ]
}

/// Default gamepad bindings
pub fn default_gamepad_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::gamepad(GamepadButton::DPadLeft), Action::MoveLeft),
        (InputSource::gamepad(GamepadButton::DPadRight), Action::MoveRight),
        (InputSource::gamepad(GamepadButton::FaceBottom), Action::Jump),
        (InputSource::gamepad(GamepadButton::DPadDown), Action::Duck),
        (InputSource::gamepad(GamepadButton::FaceLeft), Action::Ability1),
        (InputSource::gamepad(GamepadButton::FaceTop), Action::Ability2),
        (InputSource::gamepad(GamepadButton::RightShoulder), Action::Ability3),
        (InputSource::gamepad(GamepadButton::Start), Action::Pause),
        (InputSource::gamepad(GamepadButton::Select), Action::Menu),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_input_source_default_is_invalid() {
        assert_eq!(InputSource::default(), InputSource::Invalid);
        assert!(!InputSource::Invalid.is_valid());
        assert!(InputSource::key(KeyCode::Space).is_valid());
    }

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::KeyA);
        assert_eq!(source, InputSource::Keyboard(KeyCode::KeyA));
    }

    #[test]
    fn test_input_source_mouse_creation() {
        let source = InputSource::mouse(MouseButton::Left);
        assert_eq!(source, InputSource::Mouse(MouseButton::Left));
    }

    #[test]
    fn test_mapping_names_are_unique() {
        let names: HashSet<_> = Action::ALL.iter().map(|a| a.mapping_name()).collect();
        assert_eq!(names.len(), Action::ALL.len());
        assert!(names.iter().all(|n| !n.is_none()));
    }

    #[test]
    fn test_default_bindings_cover_every_action() {
        for bindings in [default_keyboard_bindings(), default_gamepad_bindings()] {
            for action in Action::ALL {
                assert!(
                    bindings.iter().any(|(_, a)| *a == action),
                    "{:?} has no default binding",
                    action
                );
            }
        }
    }

    #[test]
    fn test_default_keyboard_bindings_use_mouse_for_abilities() {
        let bindings = default_keyboard_bindings();
        let ability1 = bindings.iter().find(|(_, a)| *a == Action::Ability1);

        assert!(matches!(
            ability1,
            Some((InputSource::Mouse(MouseButton::Left), _))
        ));
    }

    #[test]
    fn test_no_duplicate_inputs_in_defaults() {
        for bindings in [default_keyboard_bindings(), default_gamepad_bindings()] {
            let mut seen_sources = HashSet::new();
            for (source, _) in bindings {
                assert!(
                    seen_sources.insert(source),
                    "Duplicate input source found in default bindings"
                );
            }
        }
    }
}
