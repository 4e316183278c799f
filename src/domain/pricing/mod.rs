//! Pricing value types

pub mod model;

pub use model::{BandCharge, PriceBreakdown, PriceRequest, PriceResult};
