//! # Room Pricing
//!
//! Rental prices for meeting-room bookings from per-room minute, hour, day
//! and week tariffs.
//!
//! ## Architecture
//!
//! - **domain**: tariff rows, price requests/results and the repository trait
//! - **application**: the price calculator and the batch pricing service
//! - **infrastructure**: the in-memory tariff repository
//! - **config**: TOML configuration with the seed tariff table
//! - **shared**: error types and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig, LoggingConfig};

pub use application::{PriceCalculator, PricingService};
pub use domain::{
    DomainError, DomainResult, PriceBreakdown, PriceRequest, PriceResult, RoomId, TariffBand,
    TariffRepository, TariffRow,
};
pub use infrastructure::InMemoryTariffRepository;
pub use shared::errors::{AppError, ConfigError};
pub use shared::telemetry::init_tracing;
