//! Room pricing use cases

pub mod calculator;
pub mod service;

pub use calculator::{PriceCalculator, AMOUNT_SCALE};
pub use service::PricingService;
