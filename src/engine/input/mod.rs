// Input configuration system
//
// This module describes what the player can bind and where those bindings
// come from. The user's own overrides live in `engine::settings`.
//
// ## Architecture
//
// - `name`: Identifiers for mappings, configs and platforms
// - `action`: Game actions, input sources and default key bindings
// - `config`: Immutable input configs and device categories
// - `registry`: Registered configs, unique by reference
// - `events`: Observer lists for registry notifications
// - `remap`: Per-player services the host exposes to the settings
//
// ## Usage Example
//
// ```rust
// use engine::input::{default_keyboard_config, ConfigRegistry, InputType};
//
// let mut registry = ConfigRegistry::new();
// registry.on_registered.subscribe(|entry| println!("{}", entry.config.config_name()));
// registry.register(default_keyboard_config(), InputType::MouseAndKeyboard, true);
//
// let keyboard_configs = registry.configs_of_type(InputType::MouseAndKeyboard);
// ```

pub mod action;
pub mod config;
pub mod events;
pub mod name;
pub mod registry;
pub mod remap;

// Re-export commonly used types
pub use action::{Action, GamepadButton, InputSource};
pub use config::{
    default_gamepad_config, default_keyboard_config, InputConfig, InputType, InputTypeFilter,
    PlayerMappableKey, DEFAULT_CONFIG_NAME,
};
pub use events::{ConfigDelegate, SubscriptionId};
pub use name::{MappingName, Name};
pub use registry::{ConfigRegistry, LoadedInputConfig};
pub use remap::{
    GamepadInputType, GamepadTypeSelector, KeyRemapper, LocalPlayer, PlayerContext,
    PlayerMappedKeys,
};
