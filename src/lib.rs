//! Compute itemized cab fares with commission, GST and discount allocation.
//!
//! # Overview
//!
//! A fare is built from a [`TripInput`] snapshot and two lists of flat
//! peak charges:
//!
//! - **Trip charges**: The base fare, plus distance and time beyond what the
//!   base fare includes, charged per kilometre and per minute.
//!
//! - **Additional charges**: Pick, night, cancellation, insurance and extra
//!   charges, plus every peak-hour and peak-date entry. Peak entries carry a
//!   time or date window for display only; they are never matched against
//!   the trip.
//!
//! - **Commission and GST**: The platform takes 10% of the subtotal as
//!   commission, and GST of 18% is charged on that commission alone.
//!
//! A user discount is capped at the commission plus additional charges. It
//! is drawn from the commission first and only then from the additional
//! charges, so GST is always 18% of the commission that remains.
//!
//! [`compute_fare`] is a pure function and never fails. Negative or
//! non-finite inputs are read as zero.
//!
//! # Examples
//!
//! ```
//! use cab_fare::{ExtraChargeEntry, TripInput, compute_fare, format_amount};
//!
//! let input = TripInput::form_defaults();
//! let peak_hours = [ExtraChargeEntry::peak_hour("rush", 15.0, "08:00", "10:00")];
//! let peak_dates = [ExtraChargeEntry::peak_date("nye", 25.0, "2024-12-31", "18:00", "23:59")];
//!
//! let fare = compute_fare(&input, &peak_hours, &peak_dates);
//! assert_eq!(fare.additional_charges, 90.0);
//! assert_eq!(format_amount(fare.grand_total), "₹290.68");
//!
//! // A discount larger than commission + additional charges is capped.
//! let generous = TripInput { discount: 1_000.0, ..input };
//! let fare = compute_fare(&generous, &[], &[]);
//! assert_eq!(format_amount(fare.discount_applied), "₹72.00");
//! assert_eq!(format_amount(fare.grand_total), "₹170.00");
//! ```
//!
//! Raw form text goes through [`TripInput::from_form`], which maps keys onto
//! [`TripField`] and coerces values with [`parse_amount`]:
//!
//! ```
//! use cab_fare::{FareError, TripInput};
//!
//! let input = TripInput::from_form([("baseFare", "80"), ("totalKm", "12 km")]).unwrap();
//! assert_eq!(input.base_fare, 80.0);
//! assert_eq!(input.total_km, 12.0);
//!
//! let err = TripInput::from_form([("surge", "2")]).unwrap_err();
//! assert_eq!(err, FareError::UnknownField("surge".to_string()));
//! ```

mod compute;
mod form;
mod rates;
mod summary;
mod types;

pub use compute::{compute_fare, compute_fare_with_rates};
pub use form::{FormSection, TripField, parse_amount};
pub use rates::{DEFAULT_COMMISSION_RATE, DEFAULT_GST_RATE, FareRates};
pub use summary::{LineItem, LineValue, TripSummary, format_amount};
pub use types::{ChargeWindow, ExtraChargeEntry, FareBreakdown, FareError, TripInput};
