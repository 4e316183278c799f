//! Tariff domain entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

/// Meeting room identifier
pub type RoomId = u32;

/// Duration band a rate applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TariffBand {
    Minute,
    Hour,
    Day,
    Week,
}

impl TariffBand {
    /// Bands from longest to shortest, the order prices are decomposed in
    pub const DESCENDING: [TariffBand; 4] = [Self::Week, Self::Day, Self::Hour, Self::Minute];

    /// Length of one unit of the band, in minutes
    pub const fn minutes(self) -> u64 {
        match self {
            Self::Minute => 1,
            Self::Hour => 60,
            Self::Day => 60 * 24,
            Self::Week => 60 * 24 * 7,
        }
    }
}

impl std::fmt::Display for TariffBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minute => write!(f, "minute"),
            Self::Hour => write!(f, "hour"),
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
        }
    }
}

/// Per-room tariff with one optional rate per band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRow {
    pub room_id: RoomId,
    #[serde(default)]
    pub per_minute: Option<Decimal>,
    #[serde(default)]
    pub per_hour: Option<Decimal>,
    #[serde(default)]
    pub per_day: Option<Decimal>,
    #[serde(default)]
    pub per_week: Option<Decimal>,
}

impl TariffRow {
    /// Row with all four rates set
    pub fn new(
        room_id: RoomId,
        per_minute: Decimal,
        per_hour: Decimal,
        per_day: Decimal,
        per_week: Decimal,
    ) -> Self {
        Self {
            room_id,
            per_minute: Some(per_minute),
            per_hour: Some(per_hour),
            per_day: Some(per_day),
            per_week: Some(per_week),
        }
    }

    /// Rate for one unit of `band`, if configured
    pub fn rate(&self, band: TariffBand) -> Option<Decimal> {
        match band {
            TariffBand::Minute => self.per_minute,
            TariffBand::Hour => self.per_hour,
            TariffBand::Day => self.per_day,
            TariffBand::Week => self.per_week,
        }
    }

    /// Check that every configured rate is non-negative
    pub fn validate(&self) -> DomainResult<()> {
        for band in TariffBand::DESCENDING {
            if let Some(rate) = self.rate(band) {
                if rate < Decimal::ZERO {
                    return Err(DomainError::InvalidTariff {
                        room_id: self.room_id,
                        reason: format!("negative {} rate {}", band, rate),
                    });
                }
            }
        }
        Ok(())
    }
}
