//! Period-over-period growth.

use rust_decimal::{Decimal, RoundingStrategy};

/// Whole-number percentage change from `prior` to `current`.
///
/// | prior | current | result |
/// |---|---|---|
/// | non-zero | any | `round((current - prior) / abs(prior) * 100)` |
/// | 0 | > 0 | 100 |
/// | 0 | <= 0 | 0 |
///
/// Rounding is half away from zero. A negative baseline is measured against
/// its magnitude so that moving up always reads as positive growth. Results
/// past the `Decimal` range saturate at `Decimal::MAX` or `Decimal::MIN`.
#[must_use]
pub fn growth_percent(current: Decimal, prior: Decimal) -> Decimal {
    if prior.is_zero() {
        return if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }

    let saturated = |up: bool| if up { Decimal::MAX } else { Decimal::MIN };

    let delta = current
        .checked_sub(prior)
        .unwrap_or_else(|| saturated(current > prior));
    delta
        .checked_div(prior.abs())
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map_or_else(
            || saturated(delta.is_sign_positive()),
            |pct| pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
}
