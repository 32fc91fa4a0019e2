pub mod events;
pub mod export;
pub mod settings;
pub mod state;
