//! Discount math shared by product badges and cart summaries.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};

/// Amount saved when paying `price` instead of `old_price`.
///
/// # Errors
///
/// Returns a [`MoneyError`] if the subtraction operation fails.
pub fn savings<'a>(
    price: &Money<'a, Currency>,
    old_price: &Money<'a, Currency>,
) -> Result<Money<'a, Currency>, MoneyError> {
    old_price.sub(*price)
}

/// Fractional discount of `price` relative to `old_price`.
///
/// A zero or unrepresentable base price yields a zero percentage.
pub fn percent_off(price: &Money<'_, Currency>, old_price: &Money<'_, Currency>) -> Percentage {
    let old_minor = old_price.to_minor_units();

    if old_minor == 0 {
        return Percentage::from(0.0);
    }

    let saved_minor = old_minor.saturating_sub(price.to_minor_units());

    let saved = Decimal::from_i64(saved_minor).unwrap_or(Decimal::ZERO);
    let base = Decimal::from_i64(old_minor).unwrap_or(Decimal::ZERO);

    if base == Decimal::ZERO {
        return Percentage::from(0.0);
    }

    Percentage::from(saved / base)
}

/// Converts a fractional percentage to percent points for display.
pub fn percent_points(percentage: Percentage) -> Decimal {
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2)
}

/// Converts a fractional percentage to whole percent points, rounding the
/// midpoint away from zero. `None` when the value does not fit a badge.
pub fn whole_percent_points(percentage: Percentage) -> Option<u8> {
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn savings_subtracts_price_from_old_price() -> TestResult {
        let price = Money::from_minor(12_990, USD);
        let old_price = Money::from_minor(15_990, USD);

        assert_eq!(savings(&price, &old_price)?, Money::from_minor(3_000, USD));

        Ok(())
    }

    #[test]
    fn savings_errors_on_currency_mismatch() {
        use rusty_money::iso::GBP;

        let price = Money::from_minor(100, GBP);
        let old_price = Money::from_minor(200, USD);

        assert!(savings(&price, &old_price).is_err());
    }

    #[test]
    fn percent_off_is_zero_for_zero_base() {
        let price = Money::from_minor(100, USD);
        let old_price = Money::from_minor(0, USD);

        assert_eq!(percent_off(&price, &old_price), Percentage::from(0.0));
    }

    #[test]
    fn percent_off_quarter() {
        let price = Money::from_minor(300, USD);
        let old_price = Money::from_minor(400, USD);

        assert_eq!(percent_off(&price, &old_price), Percentage::from(0.25));
    }

    #[test]
    fn percent_points_rounds_to_two_decimals() {
        let price = Money::from_minor(89_990, USD);
        let old_price = Money::from_minor(109_990, USD);

        let points = percent_points(percent_off(&price, &old_price));

        assert_eq!(points.to_string(), "18.18");
    }

    #[test]
    fn whole_percent_points_rounds_midpoint_away_from_zero() {
        assert_eq!(whole_percent_points(Percentage::from(0.185)), Some(19));
        assert_eq!(whole_percent_points(Percentage::from(0.1637)), Some(16));
        assert_eq!(whole_percent_points(Percentage::from(0.0)), Some(0));
    }
}
