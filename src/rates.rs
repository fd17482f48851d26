//! Commission and tax rates applied on top of the trip charges.

use serde::{Deserialize, Serialize};

use crate::types::non_negative;

/// Platform commission as a fraction of the subtotal.
pub const DEFAULT_COMMISSION_RATE: f64 = 0.10;

/// GST as a fraction of the commission left after discount.
pub const DEFAULT_GST_RATE: f64 = 0.18;

/// The rate card used by [`crate::compute_fare_with_rates`].
///
/// Fields missing from a deserialized rate card fall back to the defaults,
/// so a partial card only overrides what it names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareRates {
    pub commission_rate: f64,
    pub gst_rate: f64,
}

impl Default for FareRates {
    fn default() -> Self {
        Self {
            commission_rate: DEFAULT_COMMISSION_RATE,
            gst_rate: DEFAULT_GST_RATE,
        }
    }
}

impl FareRates {
    /// Return a copy with both rates clamped to finite, non-negative values.
    pub fn sanitized(&self) -> Self {
        Self {
            commission_rate: non_negative(self.commission_rate),
            gst_rate: non_negative(self.gst_rate),
        }
    }

    pub(crate) fn commission_percent(&self) -> f64 {
        as_percent(self.commission_rate)
    }

    pub(crate) fn gst_percent(&self) -> f64 {
        as_percent(self.gst_rate)
    }
}

/// Rate as a percentage rounded to two decimals, for labels.
fn as_percent(rate: f64) -> f64 {
    (rate * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let rates = FareRates::default();
        assert_eq!(rates.commission_rate, 0.10);
        assert_eq!(rates.gst_rate, 0.18);
    }

    #[test]
    fn partial_card_keeps_defaults() {
        let rates: FareRates = serde_json::from_str(r#"{"gst_rate": 0.05}"#).unwrap();
        assert_eq!(rates.commission_rate, DEFAULT_COMMISSION_RATE);
        assert_eq!(rates.gst_rate, 0.05);
    }

    #[test]
    fn sanitized_rejects_negative_rates() {
        let rates = FareRates {
            commission_rate: -0.1,
            gst_rate: f64::NAN,
        }
        .sanitized();
        assert_eq!(rates.commission_rate, 0.0);
        assert_eq!(rates.gst_rate, 0.0);
    }

    #[test]
    fn percent_labels_are_rounded() {
        assert_eq!(as_percent(0.07), 7.0);
        assert_eq!(FareRates::default().gst_percent(), 18.0);
    }
}
