//! Core fare computation logic.

use crate::rates::FareRates;
use crate::types::{ExtraChargeEntry, FareBreakdown, TripInput};

/// Compute the itemized fare for a trip using the default rate card
/// (10% commission, 18% GST on commission).
///
/// # Arguments
///
/// * `input`: The trip snapshot. Negative or non-finite fields are treated
///   as zero.
/// * `peak_hours`: Peak-hour entries; each adds its flat price.
/// * `peak_dates`: Peak-date entries; each adds its flat price.
///
/// # Returns
///
/// A fully populated [`FareBreakdown`]. This never fails: a discount larger
/// than the commission plus additional charges is silently capped.
///
/// # Order of operations
///
/// 1. Distance and time beyond what the base fare includes are charged at
///    the per-km and per-minute rates.
/// 2. Pick, night, cancellation, insurance, extra and peak charges are
///    summed into the additional charges.
/// 3. Commission is taken on the subtotal.
/// 4. The discount is drawn from the commission first, then from the
///    additional charges.
/// 5. GST applies only to the commission that remains.
///
/// # Examples
///
/// ```
/// use cab_fare::{compute_fare, TripInput};
///
/// let input = TripInput {
///     base_fare: 100.0,
///     min_km_included: 10.0,
///     total_km: 15.0,
///     extra_per_km: 10.0,
///     ..TripInput::default()
/// };
/// let fare = compute_fare(&input, &[], &[]);
/// assert_eq!(fare.remaining_km, 5.0);
/// assert_eq!(fare.amount_for_km, 50.0);
/// assert_eq!(fare.subtotal, 150.0);
/// ```
pub fn compute_fare(
    input: &TripInput,
    peak_hours: &[ExtraChargeEntry],
    peak_dates: &[ExtraChargeEntry],
) -> FareBreakdown {
    compute_fare_with_rates(&FareRates::default(), input, peak_hours, peak_dates)
}

/// Compute the itemized fare for a trip with an explicit rate card.
///
/// Behaves exactly like [`compute_fare`] otherwise. Rates are clamped to
/// non-negative values before use.
pub fn compute_fare_with_rates(
    rates: &FareRates,
    input: &TripInput,
    peak_hours: &[ExtraChargeEntry],
    peak_dates: &[ExtraChargeEntry],
) -> FareBreakdown {
    let rates = rates.sanitized();
    let trip = input.sanitized();

    let remaining_km = (trip.total_km - trip.min_km_included).max(0.0);
    let amount_for_km = remaining_km * trip.extra_per_km;

    let remaining_minutes = (trip.total_minutes - trip.included_minutes).max(0.0);
    let amount_for_minutes = remaining_minutes * trip.extra_per_min;

    let peak_hour_charges = sum_prices(peak_hours);
    let peak_date_charges = sum_prices(peak_dates);

    let additional_charges = trip.pick_charges
        + trip.night_charges
        + trip.cancellation_fee
        + trip.insurance
        + trip.extra_charges
        + peak_hour_charges
        + peak_date_charges;

    let subtotal = trip.base_fare + amount_for_km + amount_for_minutes + additional_charges;
    let raw_commission = subtotal * rates.commission_rate;

    let split = split_discount(trip.discount, raw_commission, additional_charges);

    let gst = split.adjusted_commission * rates.gst_rate;
    let grand_total = trip.base_fare
        + amount_for_km
        + amount_for_minutes
        + split.adjusted_additional_charges
        + split.adjusted_commission
        + gst;

    tracing::debug!(
        subtotal,
        discount_applied = split.applied,
        gst,
        grand_total,
        "computed fare"
    );

    FareBreakdown {
        remaining_km,
        amount_for_km,
        remaining_minutes,
        amount_for_minutes,
        peak_hour_charges,
        peak_date_charges,
        additional_charges,
        subtotal,
        raw_commission,
        discount_applied: split.applied,
        discount_from_commission: split.from_commission,
        discount_from_additional: split.from_additional,
        adjusted_commission: split.adjusted_commission,
        adjusted_additional_charges: split.adjusted_additional_charges,
        gst,
        grand_total,
    }
}

fn sum_prices(entries: &[ExtraChargeEntry]) -> f64 {
    entries.iter().map(ExtraChargeEntry::effective_price).sum()
}

/// How a discount was divided between the two buckets it may reduce.
struct DiscountSplit {
    applied: f64,
    from_commission: f64,
    from_additional: f64,
    adjusted_commission: f64,
    adjusted_additional_charges: f64,
}

/// Cap the discount at `commission + additional`, then draw it from the
/// commission before the additional charges.
fn split_discount(discount: f64, commission: f64, additional: f64) -> DiscountSplit {
    let available = commission + additional;
    let applied = discount.min(available);
    if applied < discount {
        tracing::trace!(requested = discount, applied, "discount capped");
    }

    let from_commission = applied.min(commission);
    let from_additional = applied - from_commission;

    DiscountSplit {
        applied,
        from_commission,
        from_additional,
        adjusted_commission: commission - from_commission,
        // `available - commission` can round a hair away from `additional`.
        adjusted_additional_charges: (additional - from_additional).max(0.0),
    }
}
