//! Pricing service for batches of room bookings

use std::path::Path;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, instrument, warn};
use validator::Validate;

use super::calculator::PriceCalculator;
use crate::config::AppConfig;
use crate::domain::{
    DomainError, DomainResult, PriceBreakdown, PriceRequest, PriceResult, TariffRepository,
};
use crate::infrastructure::storage::InMemoryTariffRepository;
use crate::shared::errors::AppError;

/// Service for pricing room bookings
///
/// Holds no mutable state; one instance can be shared across tasks.
pub struct PricingService {
    tariffs: Arc<dyn TariffRepository>,
    calculator: PriceCalculator,
}

impl PricingService {
    pub fn new(tariffs: Arc<dyn TariffRepository>) -> Self {
        Self {
            tariffs,
            calculator: PriceCalculator::new(),
        }
    }

    /// Service backed by an in-memory repository seeded from `config`
    pub fn from_config(config: &AppConfig) -> DomainResult<Self> {
        let repository = InMemoryTariffRepository::from_config(config)?;
        Ok(Self::new(Arc::new(repository)))
    }

    /// Load the TOML config at `path` and seed an in-memory repository from it
    pub fn from_config_file(path: &Path) -> Result<Self, AppError> {
        let config = AppConfig::load(path)?;
        Ok(Self::from_config(&config)?)
    }

    /// Price every request; `results[i]` belongs to `requests[i]`.
    ///
    /// A failing request only fails its own entry.
    #[instrument(skip(self, requests), fields(count = requests.len()))]
    pub async fn get_prices(&self, requests: &[PriceRequest]) -> Vec<DomainResult<PriceResult>> {
        // join_all yields in input order regardless of completion order
        let results = join_all(requests.iter().map(|request| self.get_price(request))).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, total = results.len(), "Some price requests failed");
        }
        results
    }

    /// Price a single request
    pub async fn get_price(&self, request: &PriceRequest) -> DomainResult<PriceResult> {
        validate_request(request)?;

        let tariff = self.tariffs.find_tariff(request.room_id).await?;
        if tariff.is_none() {
            warn!(room_id = request.room_id, "No tariff for room, pricing at zero");
        }

        let result = self
            .calculator
            .price(request.length_in_minutes, tariff.as_ref())
            .inspect_err(|e| {
                warn!(room_id = request.room_id, error = %e, "Price request failed");
            })?;

        debug!(
            room_id = request.room_id,
            length_in_minutes = request.length_in_minutes,
            amount = %result.amount(),
            "Price calculated"
        );
        Ok(result)
    }

    /// Band-by-band breakdown; `None` when the room has no tariff
    #[instrument(skip(self))]
    pub async fn get_breakdown(
        &self,
        request: &PriceRequest,
    ) -> DomainResult<Option<PriceBreakdown>> {
        validate_request(request)?;

        match self.tariffs.find_tariff(request.room_id).await? {
            Some(tariff) => self
                .calculator
                .breakdown(request.length_in_minutes, &tariff)
                .map(Some),
            None => Ok(None),
        }
    }
}

fn validate_request(request: &PriceRequest) -> DomainResult<()> {
    request.validate().map_err(|errors| {
        warn!(room_id = request.room_id, %errors, "Invalid price request");
        DomainError::Validation(errors.to_string())
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{RoomId, TariffBand, TariffRow};

    fn seeded() -> PricingService {
        let rows = vec![
            TariffRow::new(3, 2.into(), 22.into(), 60.into(), 105.into()),
            TariffRow::new(4, 4.into(), 40.into(), 70.into(), 150.into()),
        ];
        let repo = InMemoryTariffRepository::from_rows(rows).unwrap();
        PricingService::new(Arc::new(repo))
    }

    fn amounts(results: &[DomainResult<PriceResult>]) -> Vec<Decimal> {
        results
            .iter()
            .map(|r| r.as_ref().unwrap().amount())
            .collect()
    }

    #[tokio::test]
    async fn empty_batch_yields_empty_results() {
        assert!(seeded().get_prices(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn results_follow_request_order() {
        let service = seeded();
        let results = service
            .get_prices(&[PriceRequest::new(3, 1440), PriceRequest::new(4, 8 * 1440)])
            .await;
        assert_eq!(amounts(&results), vec![Decimal::from(60), Decimal::from(220)]);
    }

    #[tokio::test]
    async fn unknown_room_prices_at_zero() {
        let service = seeded();
        let result = service.get_price(&PriceRequest::new(6, 60)).await.unwrap();
        assert_eq!(result, PriceResult::Unpriceable);
        assert_eq!(result.amount(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn invalid_request_fails_only_its_entry() {
        let service = seeded();
        let results = service
            .get_prices(&[
                PriceRequest::new(3, 60),
                PriceRequest::new(3, -10),
                PriceRequest::new(4, 30),
            ])
            .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().amount(), Decimal::from(22));
        assert!(matches!(results[1], Err(DomainError::Validation(_))));
        assert_eq!(results[2].as_ref().unwrap().amount(), Decimal::from(120));
    }

    #[tokio::test]
    async fn breakdown_for_known_room() {
        let service = seeded();
        let breakdown = service
            .get_breakdown(&PriceRequest::new(4, 8 * 1440))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(breakdown.units(TariffBand::Week), 1);
        assert_eq!(breakdown.units(TariffBand::Day), 1);
        assert_eq!(breakdown.total, Decimal::from(220));

        assert!(service
            .get_breakdown(&PriceRequest::new(99, 60))
            .await
            .unwrap()
            .is_none());
    }

    struct FlakyRepository;

    #[async_trait]
    impl TariffRepository for FlakyRepository {
        async fn find_tariff(&self, room_id: RoomId) -> DomainResult<Option<TariffRow>> {
            if room_id == 13 {
                return Err(DomainError::Storage("connection reset".to_string()));
            }
            Ok(Some(TariffRow::new(
                room_id,
                1.into(),
                10.into(),
                100.into(),
                500.into(),
            )))
        }

        async fn find_tariffs(&self, _room_ids: &[RoomId]) -> DomainResult<Vec<TariffRow>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn repository_error_fails_only_its_entry() {
        let service = PricingService::new(Arc::new(FlakyRepository));
        let results = service
            .get_prices(&[
                PriceRequest::new(1, 5),
                PriceRequest::new(13, 5),
                PriceRequest::new(2, 60),
            ])
            .await;

        assert_eq!(results[0].as_ref().unwrap().amount(), Decimal::from(5));
        assert_eq!(
            results[1],
            Err(DomainError::Storage("connection reset".to_string()))
        );
        assert_eq!(results[2].as_ref().unwrap().amount(), Decimal::from(10));
    }
}
