pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{resolve, CliConfig};

pub use adapters::{assets::EmbeddedAssets, audio::RodioOutput, progress::TerminalProgress};
pub use config::settings::TimerSettings;
pub use crate::core::{countdown::CountdownDriver, player::NotificationPlayer, timer::SoundTimer};
pub use domain::model::InvocationOptions;
pub use utils::error::{Result, TimerError};
