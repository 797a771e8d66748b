use anyhow::Result;
use input_settings::engine::input::{
    default_gamepad_config, default_keyboard_config, Action, InputSource, InputType,
    PlayerContext,
};
use input_settings::engine::settings::{InputSettings, SettingsStore};
use log::info;
use winit::keyboard::KeyCode;

/// Number of local players the demo applies settings to
const LOCAL_PLAYERS: usize = 2;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings_dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let store = SettingsStore::new(&settings_dir);
    info!("Loading input settings from {}", store.path().display());

    let mut settings = InputSettings::load_or_default(&store);
    settings.registry_mut().on_registered.subscribe(|entry| {
        info!(
            "Input config '{}' available ({:?})",
            entry.config.config_name(),
            entry.input_type
        );
    });

    settings.register_input_config(InputType::MouseAndKeyboard, default_keyboard_config(), true);
    settings.register_input_config(InputType::Gamepad, default_gamepad_config(), false);

    let mut players: Vec<PlayerContext> = (0..LOCAL_PLAYERS).map(PlayerContext::new).collect();
    settings.apply_settings(&mut players);

    // Rebind jump to space for the first player, unless already customized
    let jump = Action::Jump.mapping_name();
    let space = InputSource::key(KeyCode::Space);
    if settings.effective_key(&jump) != space {
        settings.add_or_update_custom_binding(&jump, space, &mut players[0]);
    }

    for action in Action::ALL {
        let key = settings.effective_key(&action.mapping_name());
        info!(
            "{:<18} -> {:?} (shared with: {:?})",
            action.display_name(),
            key,
            settings.mapping_names_for_key(key)
        );
    }

    if settings.is_dirty() {
        settings.save_to(&store)?;
    }

    Ok(())
}
