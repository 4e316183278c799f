use proptest::prelude::*;
use room_pricing::{PriceCalculator, TariffRow};
use rust_decimal::Decimal;

fn rate() -> impl Strategy<Value = Decimal> {
    // up to 10_000.00 with cent precision
    (0i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn tariff() -> impl Strategy<Value = TariffRow> {
    (rate(), rate(), rate(), rate())
        .prop_map(|(minute, hour, day, week)| TariffRow::new(1, minute, hour, day, week))
}

/// Each rate is at least the dearest leftover of the shorter bands, so no
/// band threshold can make a longer booking cheaper.
fn band_consistent_tariff() -> impl Strategy<Value = TariffRow> {
    (rate(), rate(), rate(), rate()).prop_map(|(minute, hour_extra, day_extra, week_extra)| {
        let hour = minute * Decimal::from(59) + hour_extra;
        let day = hour * Decimal::from(23) + minute * Decimal::from(59) + day_extra;
        let week = day * Decimal::from(6)
            + hour * Decimal::from(23)
            + minute * Decimal::from(59)
            + week_extra;
        TariffRow::new(1, minute, hour, day, week)
    })
}

proptest! {
    #[test]
    fn zero_duration_is_free(tariff in tariff()) {
        let result = PriceCalculator::new().price(0, Some(&tariff)).unwrap();
        prop_assert_eq!(result.amount(), Decimal::ZERO);
    }

    #[test]
    fn longer_bookings_never_cost_less(
        tariff in band_consistent_tariff(),
        shorter in 0i64..60_000,
        extra in 0i64..20_000,
    ) {
        let calculator = PriceCalculator::new();
        let a = calculator.price(shorter, Some(&tariff)).unwrap().amount();
        let b = calculator.price(shorter + extra, Some(&tariff)).unwrap().amount();
        prop_assert!(a <= b, "{} min -> {}, {} min -> {}", shorter, a, shorter + extra, b);
    }

    #[test]
    fn unknown_room_is_always_zero(minutes in 0i64..1_000_000) {
        let result = PriceCalculator::new().price(minutes, None).unwrap();
        prop_assert_eq!(result.amount(), Decimal::ZERO);
    }

    #[test]
    fn amount_has_at_most_two_decimals(tariff in tariff(), minutes in 0i64..60_000) {
        let amount = PriceCalculator::new().price(minutes, Some(&tariff)).unwrap().amount();
        prop_assert!(amount.scale() <= 2);
        prop_assert!(amount >= Decimal::ZERO);
    }
}
