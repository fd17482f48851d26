//! Boundary between raw form data and [`TripInput`].
//!
//! Form widgets hand over text keyed by field name. This module maps those
//! keys onto [`TripField`] and coerces the text to amounts, so that the
//! computation only ever sees typed, non-negative snapshots.

use std::fmt;
use std::str::FromStr;

use crate::types::{FareError, TripInput, non_negative};

/// A single editable field of the fare form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripField {
    /// Flat starting charge.
    BaseFare,
    /// Kilometres covered by the base fare.
    MinKmIncluded,
    /// Distance travelled.
    TotalKm,
    /// Charge per kilometre beyond the included distance.
    ExtraPerKm,
    /// Minutes covered by the base fare.
    IncludedMinutes,
    /// Trip duration.
    TotalMinutes,
    /// Charge per minute beyond the included time.
    ExtraPerMin,
    /// Pickup charge.
    PickCharges,
    /// Night surcharge.
    NightCharges,
    /// Cancellation fee.
    CancellationFee,
    /// Trip insurance.
    Insurance,
    /// Any other flat charge.
    ExtraCharges,
    /// Flat discount requested by the user.
    Discount,
}

/// The card a field is grouped under on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSection {
    /// Base fare and distance fields.
    BasicFare,
    /// Included and charged time.
    TimeCharges,
    /// Flat surcharges and the discount.
    AdditionalCharges,
}

impl fmt::Display for FormSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormSection::BasicFare => write!(f, "Basic Fare"),
            FormSection::TimeCharges => write!(f, "Time Charges"),
            FormSection::AdditionalCharges => write!(f, "Additional Charges"),
        }
    }
}

impl TripField {
    /// Every field, in the order the form shows them.
    pub const ALL: [TripField; 13] = [
        TripField::BaseFare,
        TripField::MinKmIncluded,
        TripField::TotalKm,
        TripField::ExtraPerKm,
        TripField::IncludedMinutes,
        TripField::TotalMinutes,
        TripField::ExtraPerMin,
        TripField::PickCharges,
        TripField::NightCharges,
        TripField::CancellationFee,
        TripField::Insurance,
        TripField::ExtraCharges,
        TripField::Discount,
    ];

    /// The form key, also used as the serialized name on [`TripInput`].
    pub fn key(self) -> &'static str {
        match self {
            TripField::BaseFare => "baseFare",
            TripField::MinKmIncluded => "minKmIncluded",
            TripField::TotalKm => "totalKm",
            TripField::ExtraPerKm => "extraPerKm",
            TripField::IncludedMinutes => "includedMinutes",
            TripField::TotalMinutes => "totalMinutes",
            TripField::ExtraPerMin => "extraPerMin",
            TripField::PickCharges => "pickCharges",
            TripField::NightCharges => "nightCharges",
            TripField::CancellationFee => "cancellationFee",
            TripField::Insurance => "insurance",
            TripField::ExtraCharges => "extraCharges",
            TripField::Discount => "discount",
        }
    }

    /// Human-readable label, with the currency sign on monetary fields.
    pub fn label(self) -> &'static str {
        match self {
            TripField::BaseFare => "Base Fare (₹)",
            TripField::MinKmIncluded => "Min KM Included",
            TripField::TotalKm => "Total KM",
            TripField::ExtraPerKm => "Extra Per KM (₹)",
            TripField::IncludedMinutes => "Included Minutes",
            TripField::TotalMinutes => "Total Minutes",
            TripField::ExtraPerMin => "Extra Per Minute (₹)",
            TripField::PickCharges => "Pick Charges (₹)",
            TripField::NightCharges => "Night Charges (₹)",
            TripField::CancellationFee => "Cancellation Fee (₹)",
            TripField::Insurance => "Insurance (₹)",
            TripField::ExtraCharges => "Extra Charges (₹)",
            TripField::Discount => "Discount (₹)",
        }
    }

    pub fn section(self) -> FormSection {
        match self {
            TripField::BaseFare
            | TripField::MinKmIncluded
            | TripField::TotalKm
            | TripField::ExtraPerKm => FormSection::BasicFare,
            TripField::IncludedMinutes | TripField::TotalMinutes | TripField::ExtraPerMin => {
                FormSection::TimeCharges
            }
            TripField::PickCharges
            | TripField::NightCharges
            | TripField::CancellationFee
            | TripField::Insurance
            | TripField::ExtraCharges
            | TripField::Discount => FormSection::AdditionalCharges,
        }
    }
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TripField {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TripField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FareError::UnknownField(s.to_string()))
    }
}

/// Coerce form text to an amount.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12.5 km"` reads as `12.5`. Text with no numeric prefix, non-finite
/// values and negative values all read as `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    let text = raw.trim_start();
    let value = text[..numeric_prefix_len(text)]
        .parse::<f64>()
        .unwrap_or(0.0);
    non_negative(value)
}

/// Length of the longest `[+-]?digits[.digits][(e|E)[+-]?digits]` prefix,
/// or 0 if there is no digit before the exponent.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let skip_digits = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };
    let skip_sign = |i: usize| match bytes.get(i) {
        Some(b'+' | b'-') => i + 1,
        _ => i,
    };

    let start = skip_sign(0);
    let mut end = skip_digits(start);
    let mut digits = end - start;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(end + 1);
        digits += frac_end - end - 1;
        end = frac_end;
    }
    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = skip_sign(end + 1);
        let exp_end = skip_digits(exp_start);
        // An exponent without digits, as in "1e", is not part of the number.
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    end
}

impl TripInput {
    /// Read one field.
    pub fn get(&self, field: TripField) -> f64 {
        match field {
            TripField::BaseFare => self.base_fare,
            TripField::MinKmIncluded => self.min_km_included,
            TripField::TotalKm => self.total_km,
            TripField::ExtraPerKm => self.extra_per_km,
            TripField::IncludedMinutes => self.included_minutes,
            TripField::TotalMinutes => self.total_minutes,
            TripField::ExtraPerMin => self.extra_per_min,
            TripField::PickCharges => self.pick_charges,
            TripField::NightCharges => self.night_charges,
            TripField::CancellationFee => self.cancellation_fee,
            TripField::Insurance => self.insurance,
            TripField::ExtraCharges => self.extra_charges,
            TripField::Discount => self.discount,
        }
    }

    /// Return a new snapshot with one field replaced. The value is clamped to
    /// a finite, non-negative amount.
    pub fn with_field(mut self, field: TripField, value: f64) -> Self {
        let value = non_negative(value);
        let slot = match field {
            TripField::BaseFare => &mut self.base_fare,
            TripField::MinKmIncluded => &mut self.min_km_included,
            TripField::TotalKm => &mut self.total_km,
            TripField::ExtraPerKm => &mut self.extra_per_km,
            TripField::IncludedMinutes => &mut self.included_minutes,
            TripField::TotalMinutes => &mut self.total_minutes,
            TripField::ExtraPerMin => &mut self.extra_per_min,
            TripField::PickCharges => &mut self.pick_charges,
            TripField::NightCharges => &mut self.night_charges,
            TripField::CancellationFee => &mut self.cancellation_fee,
            TripField::Insurance => &mut self.insurance,
            TripField::ExtraCharges => &mut self.extra_charges,
            TripField::Discount => &mut self.discount,
        };
        *slot = value;
        self
    }

    /// Return a new snapshot with the field named `key` set from raw form
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::UnknownField`] if `key` names no field. The text
    /// itself never causes an error; see [`parse_amount`].
    pub fn with_raw(self, key: &str, raw: &str) -> Result<Self, FareError> {
        let field: TripField = key.parse()?;
        Ok(self.with_field(field, parse_amount(raw)))
    }

    /// Build a snapshot from `(key, text)` pairs. Fields not mentioned are
    /// zero; a repeated key keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::UnknownField`] for the first key that names no
    /// field.
    pub fn from_form<I, K, V>(pairs: I) -> Result<Self, FareError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs
            .into_iter()
            .try_fold(TripInput::default(), |input, (key, raw)| {
                input.with_raw(key.as_ref(), raw.as_ref())
            })
    }
}
