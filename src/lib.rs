// chaksu - A minimal desktop image viewer
// Library half: the config language plus the settings and state built on it

pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod images;
pub mod keys;
pub mod settings;

pub use config::{ConfigError, Diagnostic, Store, Value, ValueKind};
pub use settings::Settings;
