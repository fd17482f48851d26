//! Public types: trip inputs, extra-charge entries, the fare breakdown, and
//! error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clamp a user-supplied amount to a finite, non-negative value.
///
/// NaN, infinities and negative numbers all become `0.0`.
pub(crate) fn non_negative(value: f64) -> f64 {
    if !value.is_finite() {
        tracing::warn!(value = ?value, "non-finite amount coerced to zero");
        return 0.0;
    }
    value.max(0.0)
}

/// A snapshot of the fare form.
///
/// Every field is an amount, a distance in kilometres, or a duration in
/// minutes. Missing fields deserialize to `0.0`, and the wire names match the
/// form keys (`baseFare`, `minKmIncluded`, ...).
///
/// A new snapshot is built for every recomputation; nothing holds on to one
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TripInput {
    /// Flat starting charge.
    pub base_fare: f64,
    /// Kilometres covered by the base fare.
    pub min_km_included: f64,
    pub total_km: f64,
    /// Charge for each kilometre beyond `min_km_included`.
    pub extra_per_km: f64,
    /// Minutes covered by the base fare.
    pub included_minutes: f64,
    pub total_minutes: f64,
    /// Charge for each minute beyond `included_minutes`.
    pub extra_per_min: f64,
    pub pick_charges: f64,
    pub night_charges: f64,
    pub cancellation_fee: f64,
    pub insurance: f64,
    pub extra_charges: f64,
    /// Flat discount requested by the user. Capped during computation.
    pub discount: f64,
}

impl TripInput {
    /// The values the fare form starts with before the user edits anything.
    pub fn form_defaults() -> Self {
        Self {
            base_fare: 100.0,
            min_km_included: 10.0,
            total_km: 15.0,
            extra_per_km: 10.0,
            included_minutes: 60.0,
            total_minutes: 70.0,
            extra_per_min: 2.0,
            pick_charges: 10.0,
            night_charges: 40.0,
            ..Self::default()
        }
    }

    /// Return a copy with every field clamped to a finite, non-negative value.
    pub fn sanitized(&self) -> Self {
        Self {
            base_fare: non_negative(self.base_fare),
            min_km_included: non_negative(self.min_km_included),
            total_km: non_negative(self.total_km),
            extra_per_km: non_negative(self.extra_per_km),
            included_minutes: non_negative(self.included_minutes),
            total_minutes: non_negative(self.total_minutes),
            extra_per_min: non_negative(self.extra_per_min),
            pick_charges: non_negative(self.pick_charges),
            night_charges: non_negative(self.night_charges),
            cancellation_fee: non_negative(self.cancellation_fee),
            insurance: non_negative(self.insurance),
            extra_charges: non_negative(self.extra_charges),
            discount: non_negative(self.discount),
        }
    }
}

/// The window a peak charge is labelled with.
///
/// These strings are shown to the user but never matched against the trip's
/// actual time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ChargeWindow {
    /// A recurring time-of-day window, e.g. `"08:00"` to `"10:00"`.
    Hours { start_time: String, end_time: String },
    /// A window on a specific date.
    Dates {
        /// Calendar date, e.g. `"2024-12-31"`.
        date: String,
        start_time: String,
        end_time: String,
    },
}

/// A peak-hour or peak-date rule: a flat charge plus a descriptive window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraChargeEntry {
    /// Identifier the caller uses to edit or remove the entry.
    pub id: String,
    /// Flat charge added to the additional charges.
    pub price: f64,
    /// Display-only window.
    pub window: ChargeWindow,
}

impl ExtraChargeEntry {
    /// Create a peak-hour entry.
    pub fn peak_hour(
        id: impl Into<String>,
        price: f64,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            price,
            window: ChargeWindow::Hours {
                start_time: start_time.into(),
                end_time: end_time.into(),
            },
        }
    }

    /// Create a peak-date entry.
    pub fn peak_date(
        id: impl Into<String>,
        price: f64,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            price,
            window: ChargeWindow::Dates {
                date: date.into(),
                start_time: start_time.into(),
                end_time: end_time.into(),
            },
        }
    }

    /// The price as it enters the fare: finite and non-negative.
    pub fn effective_price(&self) -> f64 {
        non_negative(self.price)
    }
}

/// Itemized result of a fare computation.
///
/// All values are exact; rounding to two decimals is left to the display
/// layer (see [`crate::format_amount`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareBreakdown {
    /// Kilometres beyond those the base fare includes.
    pub remaining_km: f64,
    /// `remaining_km` at the per-km rate.
    pub amount_for_km: f64,
    /// Minutes beyond those the base fare includes.
    pub remaining_minutes: f64,
    /// `remaining_minutes` at the per-minute rate.
    pub amount_for_minutes: f64,
    /// Sum of peak-hour entry prices.
    pub peak_hour_charges: f64,
    /// Sum of peak-date entry prices.
    pub peak_date_charges: f64,
    /// Pick, night, cancellation, insurance and extra charges plus all peak
    /// charges, before any discount.
    pub additional_charges: f64,
    /// Base fare, distance and time charges, and additional charges.
    pub subtotal: f64,
    /// Commission on the subtotal, before any discount.
    pub raw_commission: f64,
    /// The requested discount after capping.
    pub discount_applied: f64,
    /// Part of the discount taken from the commission.
    pub discount_from_commission: f64,
    /// Part of the discount taken from the additional charges.
    pub discount_from_additional: f64,
    /// Commission left after the discount.
    pub adjusted_commission: f64,
    /// Additional charges left after the discount.
    pub adjusted_additional_charges: f64,
    /// GST on `adjusted_commission`.
    pub gst: f64,
    /// Amount payable.
    pub grand_total: f64,
}

/// Errors raised while turning raw form data into a [`TripInput`].
///
/// Fare computation itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FareError {
    /// A form key did not name any trip field.
    #[error("unknown trip field: {0}")]
    UnknownField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_clamps_negative_and_non_finite() {
        let input = TripInput {
            base_fare: -50.0,
            total_km: f64::NAN,
            extra_per_km: f64::INFINITY,
            discount: f64::NEG_INFINITY,
            insurance: 12.5,
            ..TripInput::default()
        };
        let clean = input.sanitized();
        assert_eq!(clean.base_fare, 0.0);
        assert_eq!(clean.total_km, 0.0);
        assert_eq!(clean.extra_per_km, 0.0);
        assert_eq!(clean.discount, 0.0);
        assert_eq!(clean.insurance, 12.5);
    }

    #[test]
    fn missing_fields_deserialize_to_zero() {
        let input: TripInput =
            serde_json::from_str(r#"{"baseFare": 80, "totalKm": 12.5}"#).unwrap();
        assert_eq!(input.base_fare, 80.0);
        assert_eq!(input.total_km, 12.5);
        assert_eq!(input.min_km_included, 0.0);
        assert_eq!(input.discount, 0.0);
    }

    #[test]
    fn entry_deserializes_with_tagged_window() {
        let entry: ExtraChargeEntry = serde_json::from_str(
            r#"{"id":"rush","price":15,"window":{"kind":"hours","startTime":"08:00","endTime":"10:00"}}"#,
        )
        .unwrap();
        assert_eq!(entry, ExtraChargeEntry::peak_hour("rush", 15.0, "08:00", "10:00"));
    }

    #[test]
    fn window_fields_serialize_camel_case() {
        let entry = ExtraChargeEntry::peak_date("nye", 25.0, "2024-12-31", "18:00", "23:59");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["window"]["kind"], "dates");
        assert_eq!(json["window"]["startTime"], "18:00");
        assert_eq!(json["window"]["endTime"], "23:59");
        assert!(json["window"].get("start_time").is_none());
    }

    #[test]
    fn negative_entry_price_is_ignored() {
        let entry = ExtraChargeEntry::peak_date("d1", -20.0, "2024-12-25", "00:00", "23:59");
        assert_eq!(entry.effective_price(), 0.0);
    }

    #[test]
    fn error_display() {
        let err = FareError::UnknownField("fare".to_string());
        assert_eq!(err.to_string(), "unknown trip field: fare");
    }
}
