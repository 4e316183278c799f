//! Tariff aggregate
//!
//! Per-room rates for the minute, hour, day and week bands.

pub mod model;
pub mod repository;

pub use model::{RoomId, TariffBand, TariffRow};
pub use repository::TariffRepository;
