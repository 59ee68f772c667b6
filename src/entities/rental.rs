use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::fare::{round2, DRIVER_CHARGE};
use crate::entities::DriveType;
use crate::error::{invalid_input_error, Error};

// The daily flow collects a customer-chosen advance with a 30% floor. The
// hourly booking flow runs a fixed 20% policy; the two are separate on
// purpose and share nothing beyond the driver surcharge figure.
const MINIMUM_ADVANCE_SHARE: f64 = 0.3;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// The modal rental form: a picked vehicle with its daily rate, a rental
/// window in whole dates, and the advance the customer offers to pay now.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RentalRequest {
    pub vehicle: String,
    pub daily_rate: f64,
    pub contact: Contact,
    pub pickup_location: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    #[serde(default)]
    pub estimated_km: f64,
    pub drive_type: DriveType,
    pub payment_method: String,
    pub advance_offer: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RentalEstimate {
    pub days: i64,
    pub rental_amount: f64,
    pub driver_fee: f64,
    pub total: f64,
    pub min_advance: f64,
    pub max_advance: f64,
}

impl RentalEstimate {
    /// Whole-day billing: the driver fee accrues per day, unlike the hourly
    /// flow's flat surcharge. The return date must fall after pickup.
    pub fn compute(request: &RentalRequest) -> Result<Self, Error> {
        let days = request
            .return_date
            .signed_duration_since(request.pickup_date)
            .num_days();

        if days <= 0 {
            return Err(invalid_input_error());
        }

        if !request.daily_rate.is_finite() || request.daily_rate <= 0.0 {
            return Err(invalid_input_error());
        }

        let rental_amount = round2(request.daily_rate * days as f64);
        let driver_fee = if request.drive_type.with_driver() {
            DRIVER_CHARGE * days as f64
        } else {
            0.0
        };

        let total = round2(rental_amount + driver_fee);
        let min_advance = (total * MINIMUM_ADVANCE_SHARE).ceil();

        Ok(Self {
            days,
            rental_amount,
            driver_fee,
            total,
            min_advance,
            max_advance: total,
        })
    }
}

/// What the confirmation modal shows, and what the snapshot records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RentalConfirmation {
    pub reference: String,
    pub vehicle: String,
    pub customer_name: String,
    pub pickup_location: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub payment_method: String,
    pub total_amount: f64,
    pub advance_paid: f64,
    pub balance_due: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RentalOutcome {
    Rejected { message: String },
    Confirmed { confirmation: RentalConfirmation },
}

impl RentalRequest {
    /// Applies the advance-payment window to the offered amount. Outside the
    /// window the outcome carries the inline message the form shows; inside
    /// it the rental is confirmed under the given reference.
    pub fn decide(&self, reference: String) -> Result<RentalOutcome, Error> {
        let estimate = RentalEstimate::compute(self)?;

        if self.advance_offer < estimate.min_advance {
            return Ok(RentalOutcome::Rejected {
                message: format!("Minimum advance is ₹{}", estimate.min_advance),
            });
        }

        if self.advance_offer > estimate.max_advance {
            return Ok(RentalOutcome::Rejected {
                message: "Advance cannot exceed the total amount".into(),
            });
        }

        Ok(RentalOutcome::Confirmed {
            confirmation: RentalConfirmation {
                reference,
                vehicle: self.vehicle.clone(),
                customer_name: self.contact.name.clone(),
                pickup_location: self.pickup_location.clone(),
                pickup_date: self.pickup_date,
                return_date: self.return_date,
                payment_method: self.payment_method.clone(),
                total_amount: estimate.total,
                advance_paid: self.advance_offer,
                balance_due: round2(estimate.total - self.advance_offer),
            },
        })
    }
}

#[cfg(test)]
fn two_day_request(advance_offer: f64) -> RentalRequest {
    RentalRequest {
        vehicle: "Maruti Esteem".into(),
        daily_rate: 1000.0,
        contact: Contact {
            name: "Asha".into(),
            ..Contact::default()
        },
        pickup_location: "City Office".into(),
        pickup_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        estimated_km: 120.0,
        drive_type: DriveType::WithDriver,
        payment_method: "cash".into(),
        advance_offer,
    }
}

#[test]
fn daily_totals_accrue_the_driver_fee_per_day() {
    let estimate = RentalEstimate::compute(&two_day_request(900.0)).unwrap();

    assert_eq!(estimate.days, 2);
    assert_eq!(estimate.rental_amount, 2000.0);
    assert_eq!(estimate.driver_fee, 1000.0);
    assert_eq!(estimate.total, 3000.0);
    assert_eq!(estimate.min_advance, 900.0);
    assert_eq!(estimate.max_advance, 3000.0);
}

#[test]
fn return_date_must_fall_after_pickup() {
    let mut request = two_day_request(900.0);
    request.return_date = request.pickup_date;

    assert!(RentalEstimate::compute(&request).is_err());
}

#[test]
fn advance_below_the_minimum_is_rejected_with_the_inline_message() {
    let outcome = two_day_request(899.0).decide("DE-000007".into()).unwrap();

    match outcome {
        RentalOutcome::Rejected { message } => {
            assert_eq!(message, "Minimum advance is ₹900");
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn advance_at_the_minimum_confirms_with_the_balance_due() {
    let outcome = two_day_request(900.0).decide("DE-000008".into()).unwrap();

    match outcome {
        RentalOutcome::Confirmed { confirmation } => {
            assert_eq!(confirmation.reference, "DE-000008");
            assert_eq!(confirmation.total_amount, 3000.0);
            assert_eq!(confirmation.advance_paid, 900.0);
            assert_eq!(confirmation.balance_due, 2100.0);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn advance_above_the_total_is_rejected() {
    let outcome = two_day_request(3500.0).decide("DE-000009".into()).unwrap();

    assert!(matches!(outcome, RentalOutcome::Rejected { message: _ }));
}
