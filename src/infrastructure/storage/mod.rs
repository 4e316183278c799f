//! Tariff repository implementations

mod memory;

pub use memory::InMemoryTariffRepository;
