//! Display helpers for a computed fare.

use std::fmt;

use crate::rates::FareRates;
use crate::types::{FareBreakdown, TripInput};

/// Format an amount in rupees with two decimals, e.g. `₹245.96`.
pub fn format_amount(amount: f64) -> String {
    format!("₹{amount:.2}")
}

/// What a [`LineItem`] holds: a count of units or a monetary amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineValue {
    Kilometres(f64),
    Minutes(f64),
    Amount(f64),
}

impl fmt::Display for LineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineValue::Kilometres(km) => write!(f, "{km} KM"),
            LineValue::Minutes(min) => write!(f, "{min} min"),
            LineValue::Amount(amount) => f.write_str(&format_amount(*amount)),
        }
    }
}

/// One labelled row of the calculation panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub label: String,
    pub value: LineValue,
}

impl LineItem {
    fn new(label: impl Into<String>, value: LineValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl FareBreakdown {
    /// The rows of the calculation panel, top to bottom. The grand total is
    /// not included.
    ///
    /// `rates` only affects the percentages printed in the commission and
    /// GST labels.
    pub fn line_items(&self, rates: &FareRates) -> Vec<LineItem> {
        vec![
            LineItem::new("Remaining KM", LineValue::Kilometres(self.remaining_km)),
            LineItem::new("Amount for KM", LineValue::Amount(self.amount_for_km)),
            LineItem::new(
                "Remaining Minutes",
                LineValue::Minutes(self.remaining_minutes),
            ),
            LineItem::new(
                "Amount for Minutes",
                LineValue::Amount(self.amount_for_minutes),
            ),
            LineItem::new(
                "Peak Hour Charges",
                LineValue::Amount(self.peak_hour_charges),
            ),
            LineItem::new(
                "Peak Date Charges",
                LineValue::Amount(self.peak_date_charges),
            ),
            LineItem::new(
                "Additional Charges",
                LineValue::Amount(self.additional_charges),
            ),
            LineItem::new("Subtotal", LineValue::Amount(self.subtotal)),
            LineItem::new("Discount", LineValue::Amount(self.discount_applied)),
            LineItem::new(
                format!("Company Commission ({}%)", rates.commission_percent()),
                LineValue::Amount(self.adjusted_commission),
            ),
            LineItem::new(
                format!("GST ({}% of Commission)", rates.gst_percent()),
                LineValue::Amount(self.gst),
            ),
        ]
    }
}

impl fmt::Display for FareBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.line_items(&FareRates::default()) {
            writeln!(f, "{}: {}", item.label, item.value)?;
        }
        write!(f, "Grand Total: {}", format_amount(self.grand_total))
    }
}

/// The short trip recap shown next to the grand total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripSummary {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub base_fare: f64,
    /// Distance and time charges plus pick and night charges.
    pub extra_charges: f64,
}

impl TripSummary {
    pub fn new(input: &TripInput, fare: &FareBreakdown) -> Self {
        let input = input.sanitized();
        Self {
            distance_km: input.total_km,
            duration_minutes: input.total_minutes,
            base_fare: input.base_fare,
            extra_charges: fare.amount_for_km
                + fare.amount_for_minutes
                + input.pick_charges
                + input.night_charges,
        }
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distance: {}", LineValue::Kilometres(self.distance_km))?;
        writeln!(f, "Duration: {}", LineValue::Minutes(self.duration_minutes))?;
        writeln!(f, "Base Fare: {}", format_amount(self.base_fare))?;
        write!(f, "Extra Charges: {}", format_amount(self.extra_charges))
    }
}
