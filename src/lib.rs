// Player input settings: controller platform and custom key bindings
// layered over registered input configs

pub mod engine;
