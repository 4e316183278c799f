pub mod pricing;

// Re-export key types for convenience
pub use pricing::{PriceCalculator, PricingService};
