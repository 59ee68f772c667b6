use serde::{Deserialize, Serialize};

use crate::entities::BookingDraft;

/// Flat surcharge when the rental comes with a driver. Both pricing policies
/// charge the same figure.
pub const DRIVER_CHARGE: f64 = 500.0;

/// Upfront share of the total collected at booking time. The daily rental
/// flow runs a separate 30% minimum policy; the two are intentionally not
/// unified.
const ADVANCE_SHARE: f64 = 0.2;

/// Every booking is billed for at least this many hours.
pub const MINIMUM_HOURS: i64 = 4;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateCard {
    pub per_hour: f64,
    pub per_km: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FareQuote {
    pub hours: i64,
    pub base_amount: f64,
    pub driver_charge: f64,
    pub total: f64,
    pub advance_due: f64,
    pub pending_due: f64,
}

impl FareQuote {
    /// Recomputes the whole quote from the current draft. Pure: same draft
    /// and rates, same quote. There is nothing to memoize and no failure
    /// mode; malformed input was already coerced to zero at the draft
    /// boundary.
    pub fn compute(rates: &RateCard, draft: &BookingDraft) -> Self {
        let hours = draft.billable_hours();

        let base_amount = (rates.per_hour * hours as f64)
            .max(rates.per_km * draft.estimated_km)
            .max(rates.per_hour * MINIMUM_HOURS as f64);

        let driver_charge = if draft.drive_type.with_driver() {
            DRIVER_CHARGE
        } else {
            0.0
        };

        let total = round2(base_amount + driver_charge);
        let advance_due = round2(total * ADVANCE_SHARE);
        let pending_due = round2(total - advance_due);

        Self {
            hours,
            base_amount: round2(base_amount),
            driver_charge,
            total,
            advance_due,
            pending_due,
        }
    }
}

/// A staff return form: the damage fee arrives as the raw form string.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReturnClaim {
    pub total_amount: f64,
    pub advance_paid: f64,
    #[serde(default)]
    pub damage_reported: bool,
    pub damage_fee: Option<String>,
}

impl ReturnClaim {
    /// Garbage and negative fees count as zero.
    pub fn damage_fee(&self) -> f64 {
        self.damage_fee
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|fee| fee.is_finite() && *fee >= 0.0)
            .unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settlement {
    pub damage_reported: bool,
    pub damage_fee: f64,
    pub grand_total: f64,
    pub pending_due: f64,
}

impl Settlement {
    /// The fee is added to the total once; what remains after the advance is
    /// floored at zero so an over-collected advance never shows a negative
    /// balance.
    pub fn compute(
        total: f64,
        advance_paid: f64,
        damage_reported: bool,
        damage_fee: f64,
    ) -> Self {
        let damage_fee = if damage_fee.is_finite() && damage_fee > 0.0 {
            damage_fee
        } else {
            0.0
        };

        let grand_total = round2(total + damage_fee);
        let pending_due = round2((grand_total - advance_paid).max(0.0));

        Self {
            damage_reported,
            damage_fee,
            grand_total,
            pending_due,
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[test]
fn three_hour_span_bills_the_four_hour_minimum() {
    use crate::entities::{BookingForm, DriveType};

    let form = BookingForm {
        drive_type: Some("self_drive".into()),
        start_time: Some("2024-01-01T00:00".into()),
        end_time: Some("2024-01-01T03:00".into()),
        estimated_km: None,
        aadhaar_number: None,
        license_number: None,
    };
    let draft = BookingDraft::from_form(&form);

    assert_eq!(draft.drive_type, DriveType::SelfDrive);

    let rates = RateCard {
        per_hour: 200.0,
        per_km: 12.5,
    };
    let quote = FareQuote::compute(&rates, &draft);

    assert_eq!(quote.hours, 4);
    assert_eq!(quote.base_amount, 800.0);
}

#[test]
fn distance_charge_wins_when_it_exceeds_the_hourly_charge() {
    let rates = RateCard {
        per_hour: 200.0,
        per_km: 12.5,
    };

    let mut draft = BookingDraft::default();
    draft.estimated_km = 100.0;

    // 4 hours * 200 = 800 < 100 km * 12.5 = 1250
    let quote = FareQuote::compute(&rates, &draft);

    assert_eq!(quote.hours, 4);
    assert_eq!(quote.base_amount, 1250.0);
    assert_eq!(quote.total, 1250.0);
}

#[test]
fn driver_surcharge_applies_only_with_driver() {
    use crate::entities::DriveType;

    let rates = RateCard {
        per_hour: 200.0,
        per_km: 12.5,
    };

    let mut draft = BookingDraft::default();
    let self_drive = FareQuote::compute(&rates, &draft);

    draft.drive_type = DriveType::WithDriver;
    let with_driver = FareQuote::compute(&rates, &draft);

    assert_eq!(self_drive.driver_charge, 0.0);
    assert_eq!(with_driver.driver_charge, 500.0);
    assert_eq!(with_driver.total, self_drive.total + 500.0);
}

#[test]
fn advance_and_pending_sum_back_to_the_total() {
    let rates = RateCard {
        per_hour: 333.33,
        per_km: 12.5,
    };

    let mut draft = BookingDraft::default();
    draft.estimated_km = 7.0;

    let quote = FareQuote::compute(&rates, &draft);

    assert_eq!(quote.total, round2(quote.advance_due + quote.pending_due));
    assert_eq!(quote.advance_due, round2(quote.total * 0.2));
}

#[test]
fn settlement_adds_the_damage_fee_once_and_floors_pending() {
    let settlement = Settlement::compute(1000.0, 200.0, true, 150.0);

    assert_eq!(settlement.grand_total, 1150.0);
    assert_eq!(settlement.pending_due, 950.0);

    let overpaid = Settlement::compute(1000.0, 1200.0, false, 0.0);

    assert_eq!(overpaid.grand_total, 1000.0);
    assert_eq!(overpaid.pending_due, 0.0);
}

#[test]
fn negative_and_malformed_damage_fees_count_as_zero() {
    let settlement = Settlement::compute(1000.0, 200.0, true, -50.0);

    assert_eq!(settlement.damage_fee, 0.0);
    assert_eq!(settlement.grand_total, 1000.0);

    let claim = ReturnClaim {
        total_amount: 1000.0,
        advance_paid: 200.0,
        damage_reported: true,
        damage_fee: Some("not a number".into()),
    };

    assert_eq!(claim.damage_fee(), 0.0);

    let negative = ReturnClaim {
        damage_fee: Some("-25".into()),
        ..claim
    };

    assert_eq!(negative.damage_fee(), 0.0);
}
