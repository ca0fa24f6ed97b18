//! Revenue projection math
//!
//! Pure functions behind the results screen and the submitted payload.
//! Figures are annualised over 52 weeks and rounded to whole dollars.

const WEEKS_PER_YEAR: f64 = 52.0;

/// Retention suggested when no price has been entered yet
pub const DEFAULT_RETENTION: f64 = 90.0;

/// Floor applied to the suggested retention
pub const MIN_PREDICTED_RETENTION: f64 = 80.0;

/// Ceiling applied to the suggested retention
pub const MAX_PREDICTED_RETENTION: f64 = 100.0;

/// Share of the relative price increase assumed to walk away
const ATTRITION_FACTOR: f64 = 0.6;

fn is_positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Annual revenue at the current price and weekly volume
pub fn current_annual(price: Option<f64>, volume: Option<f64>) -> i64 {
    match (is_positive(price), is_positive(volume)) {
        (Some(price), Some(volume)) => (price * volume * WEEKS_PER_YEAR).round() as i64,
        _ => 0,
    }
}

/// Annual revenue after the price increase, with volume scaled by retention
pub fn new_annual(
    price: Option<f64>,
    volume: Option<f64>,
    price_increase: f64,
    retention_percent: f64,
) -> i64 {
    match (is_positive(price), is_positive(volume)) {
        (Some(price), Some(volume)) => {
            let retained = volume * retention_percent / 100.0;
            ((price + price_increase) * retained * WEEKS_PER_YEAR).round() as i64
        }
        _ => 0,
    }
}

/// Projected gain, never negative
pub fn uplift(current_annual: i64, new_annual: i64) -> i64 {
    (new_annual - current_annual).max(0)
}

/// Heuristic retention for a given price increase.
///
/// Every percent of price increase loses 0.6% of clients, bounded to
/// `[80, 100]`. Falls back to [`DEFAULT_RETENTION`] without a usable price.
pub fn predicted_retention(price_increase: f64, price: Option<f64>) -> f64 {
    match is_positive(price) {
        Some(price) => {
            let relative = price_increase / price * 100.0;
            (100.0 - relative * ATTRITION_FACTOR)
                .clamp(MIN_PREDICTED_RETENTION, MAX_PREDICTED_RETENTION)
        }
        None => DEFAULT_RETENTION,
    }
}

/// The three headline figures, always computed together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Projection {
    pub current_annual: i64,
    pub new_annual: i64,
    pub uplift: i64,
}

impl Projection {
    pub fn compute(
        price: Option<f64>,
        volume: Option<f64>,
        price_increase: f64,
        retention_percent: f64,
    ) -> Self {
        let current_annual = current_annual(price, volume);
        let new_annual = new_annual(price, volume, price_increase, retention_percent);
        Self {
            current_annual,
            new_annual,
            uplift: uplift(current_annual, new_annual),
        }
    }
}

/// Format whole dollars with thousands separators, e.g. `$140,400`
pub fn format_dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod annual {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_current_annual_multiplies_by_weeks() {
            assert_eq!(current_annual(Some(50.0), Some(50.0)), 130_000);
            assert_eq!(current_annual(Some(19.99), Some(3.0)), 3118);
        }

        #[test]
        fn test_current_annual_zero_guard() {
            assert_eq!(current_annual(None, Some(50.0)), 0);
            assert_eq!(current_annual(Some(50.0), None), 0);
            assert_eq!(current_annual(Some(0.0), Some(50.0)), 0);
            assert_eq!(current_annual(Some(-5.0), Some(50.0)), 0);
            assert_eq!(current_annual(Some(f64::NAN), Some(50.0)), 0);
        }

        #[test]
        fn test_new_annual_scales_volume_by_retention() {
            assert_eq!(new_annual(Some(50.0), Some(50.0), 10.0, 90.0), 140_400);
        }

        #[test]
        fn test_new_annual_zero_guard() {
            assert_eq!(new_annual(None, Some(50.0), 10.0, 90.0), 0);
            assert_eq!(new_annual(Some(50.0), Some(0.0), 10.0, 90.0), 0);
        }

        #[test]
        fn test_new_annual_full_retention_no_increase_matches_current() {
            assert_eq!(
                new_annual(Some(42.5), Some(17.0), 0.0, 100.0),
                current_annual(Some(42.5), Some(17.0))
            );
        }
    }

    mod uplift {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_uplift_is_difference() {
            assert_eq!(uplift(130_000, 140_400), 10_400);
        }

        #[test]
        fn test_uplift_never_negative() {
            assert_eq!(uplift(130_000, 100_000), 0);
            for retention in 70..=100 {
                let p = Projection::compute(Some(80.0), Some(30.0), 1.0, retention as f64);
                assert!(p.uplift >= 0);
            }
        }
    }

    mod retention {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_predicted_retention_defaults_without_price() {
            assert_eq!(predicted_retention(10.0, None), 90.0);
            assert_eq!(predicted_retention(10.0, Some(0.0)), 90.0);
            assert_eq!(predicted_retention(10.0, Some(-1.0)), 90.0);
        }

        #[test]
        fn test_predicted_retention_formula() {
            // 20% increase loses 12% of clients
            assert!((predicted_retention(10.0, Some(50.0)) - 88.0).abs() < 1e-9);
        }

        #[test]
        fn test_predicted_retention_is_clamped() {
            assert_eq!(predicted_retention(100.0, Some(10.0)), 80.0);
            assert_eq!(predicted_retention(-10.0, Some(50.0)), 100.0);
            for increase in 0..=100 {
                let r = predicted_retention(increase as f64, Some(25.0));
                assert!((80.0..=100.0).contains(&r));
            }
        }
    }

    mod projection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_end_to_end_scenario() {
            let projection = Projection::compute(Some(50.0), Some(50.0), 10.0, 90.0);
            assert_eq!(
                projection,
                Projection {
                    current_annual: 130_000,
                    new_annual: 140_400,
                    uplift: 10_400,
                }
            );
        }

        #[test]
        fn test_missing_inputs_give_empty_projection() {
            assert_eq!(
                Projection::compute(None, None, 10.0, 90.0),
                Projection::default()
            );
        }
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(10_400), "$10,400");
        assert_eq!(format_dollars(1_140_400), "$1,140,400");
        assert_eq!(format_dollars(-2500), "-$2,500");
    }
}
