//! Band-based price calculation
//!
//! A duration is decomposed from the longest band down: whole units of a band
//! are charged at its rate and the leftover minutes are priced against the
//! shorter bands. A booking under an hour is charged per minute, one under a
//! day per hour plus leftover minutes, and so on. Only the final total is
//! rounded.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{
    BandCharge, DomainError, DomainResult, PriceBreakdown, PriceResult, TariffBand, TariffRow,
};

/// Decimal places of a published amount
pub const AMOUNT_SCALE: u32 = 2;

/// Stateless price calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCalculator;

impl PriceCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Price `duration_minutes` against `tariff`.
    ///
    /// A negative duration is rejected, a missing tariff is
    /// [`PriceResult::Unpriceable`] and a zero duration costs nothing.
    pub fn price(
        &self,
        duration_minutes: i64,
        tariff: Option<&TariffRow>,
    ) -> DomainResult<PriceResult> {
        let Some(tariff) = tariff else {
            if duration_minutes < 0 {
                return Err(DomainError::Validation(format!(
                    "negative duration {duration_minutes}"
                )));
            }
            return Ok(PriceResult::Unpriceable);
        };

        let breakdown = self.breakdown(duration_minutes, tariff)?;
        Ok(PriceResult::Priced {
            amount: breakdown.total,
        })
    }

    /// Band charges making up the price of `duration_minutes`
    pub fn breakdown(
        &self,
        duration_minutes: i64,
        tariff: &TariffRow,
    ) -> DomainResult<PriceBreakdown> {
        let minutes = u64::try_from(duration_minutes).map_err(|_| DomainError::InvalidDuration {
            room_id: tariff.room_id,
            minutes: duration_minutes,
        })?;

        let charges = band_charges(tariff, &TariffBand::DESCENDING, minutes)?;
        let subtotal = sum(tariff, &charges)?;
        let total =
            subtotal.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);

        Ok(PriceBreakdown {
            room_id: tariff.room_id,
            length_in_minutes: minutes,
            charges,
            subtotal,
            total,
        })
    }
}

/// Charges for `minutes` using `bands` (longest first). `minutes` is shorter
/// than one unit of the band preceding `bands`.
fn band_charges(
    tariff: &TariffRow,
    bands: &[TariffBand],
    minutes: u64,
) -> DomainResult<Vec<BandCharge>> {
    let Some((&band, shorter)) = bands.split_first() else {
        return Ok(Vec::new());
    };
    if minutes == 0 {
        return Ok(Vec::new());
    }

    let whole = minutes / band.minutes();
    let rest = minutes % band.minutes();

    let mut charges = Vec::new();
    if whole > 0 {
        let rate = tariff.rate(band).ok_or(DomainError::MissingRate {
            room_id: tariff.room_id,
            band,
        })?;
        let amount = rate
            .checked_mul(Decimal::from(whole))
            .ok_or(DomainError::AmountOverflow {
                room_id: tariff.room_id,
            })?;
        charges.push(BandCharge {
            band,
            units: whole,
            rate,
            amount,
        });
    }

    let leftover = band_charges(tariff, shorter, rest)?;
    charges.extend(leftover);
    Ok(charges)
}

fn sum(tariff: &TariffRow, charges: &[BandCharge]) -> DomainResult<Decimal> {
    charges.iter().try_fold(Decimal::ZERO, |acc, c| {
        acc.checked_add(c.amount).ok_or(DomainError::AmountOverflow {
            room_id: tariff.room_id,
        })
    })
}
