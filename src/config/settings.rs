use serde::Deserialize;

/// Top-level configuration settings for embedding applications.
///
/// Includes settings for logging and for sizing rooms.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub logging: LogSettings,
    pub room: RoomSettings,
}

/// Configuration settings for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Configuration settings for rooms.
///
/// The capacities are allocation hints for the message log and the user
/// roster; they never cap how much a room can hold.
#[derive(Debug, Deserialize, Clone)]
pub struct RoomSettings {
    pub message_capacity: usize,
    pub user_capacity: usize,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub logging: Option<PartialLogSettings>,
    pub room: Option<PartialRoomSettings>,
}

/// Partial logging settings.
#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

/// Partial room settings.
#[derive(Debug, Deserialize)]
pub struct PartialRoomSettings {
    pub message_capacity: Option<usize>,
    pub user_capacity: Option<usize>,
}

/// Provides default values for `Settings`.
impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LogSettings {
                level: "info".to_string(),
            },
            room: RoomSettings {
                message_capacity: 128,
                user_capacity: 32,
            },
        }
    }
}
