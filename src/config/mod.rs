mod settings;

use config::{Config, ConfigError, Environment, File};

use crate::config::settings::PartialSettings;

pub use settings::{LogSettings, RoomSettings, Settings};

/// Loads the configuration from the default file and environment variables.
/// Merges the configuration with default values.
/// Returns a `Settings` struct containing the logging and room configurations.
pub fn load_config() -> Result<Settings, ConfigError> {
    let _ = dotenvy::dotenv();

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        logging: LogSettings {
            level: partial
                .logging
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.logging.level),
        },
        room: RoomSettings {
            message_capacity: partial
                .room
                .as_ref()
                .and_then(|r| r.message_capacity)
                .unwrap_or(default.room.message_capacity),
            user_capacity: partial
                .room
                .as_ref()
                .and_then(|r| r.user_capacity)
                .unwrap_or(default.room.user_capacity),
        },
    })
}
