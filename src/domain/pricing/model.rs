//! Price requests, results and breakdowns

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::tariff::{RoomId, TariffBand};

/// A room and how long it is booked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    pub room_id: RoomId,
    #[validate(range(min = 0, message = "lengthInMinutes must be >= 0"))]
    pub length_in_minutes: i64,
}

impl PriceRequest {
    pub fn new(room_id: RoomId, length_in_minutes: i64) -> Self {
        Self {
            room_id,
            length_in_minutes,
        }
    }
}

/// Outcome of pricing one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PriceResult {
    /// Amount rounded to 2 decimal places
    Priced { amount: Decimal },
    /// The room has no tariff
    Unpriceable,
}

impl PriceResult {
    /// Charged amount; zero when unpriceable
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Priced { amount } => *amount,
            Self::Unpriceable => Decimal::ZERO,
        }
    }

    pub fn is_priced(&self) -> bool {
        matches!(self, Self::Priced { .. })
    }
}

/// Whole units charged in one band
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCharge {
    pub band: TariffBand,
    pub units: u64,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Band-by-band composition of a price
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub room_id: RoomId,
    pub length_in_minutes: u64,
    /// Longest band first; bands with no units are omitted
    pub charges: Vec<BandCharge>,
    /// Unrounded sum of the charges
    pub subtotal: Decimal,
    /// `subtotal` rounded to 2 decimal places
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Units charged in `band`, zero if the band is not part of the price
    pub fn units(&self, band: TariffBand) -> u64 {
        self.charges
            .iter()
            .find(|c| c.band == band)
            .map(|c| c.units)
            .unwrap_or(0)
    }
}
