use thiserror::Error;

use crate::domain::tariff::{RoomId, TariffBand};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid duration for room {room_id}: {minutes} minutes")]
    InvalidDuration { room_id: RoomId, minutes: i64 },

    #[error("Room {room_id} has no {band} rate configured")]
    MissingRate { room_id: RoomId, band: TariffBand },

    #[error("Price for room {room_id} overflows the amount range")]
    AmountOverflow { room_id: RoomId },

    #[error("Invalid tariff for room {room_id}: {reason}")]
    InvalidTariff { room_id: RoomId, reason: String },

    #[error("Duplicate tariff for room {0}")]
    DuplicateRoom(RoomId),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to initialize tracing: {0}")]
    Tracing(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
