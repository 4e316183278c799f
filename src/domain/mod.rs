//! Domain layer
//!
//! - `tariff` — per-room rates and the repository interface
//! - `pricing` — requests, results and price breakdowns

pub mod pricing;
pub mod tariff;

pub use pricing::{BandCharge, PriceBreakdown, PriceRequest, PriceResult};
pub use tariff::{RoomId, TariffBand, TariffRepository, TariffRow};

pub use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
