// Engine modules: input configs and user input settings

pub mod input;
pub mod settings;
