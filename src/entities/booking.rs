use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::fare::MINIMUM_HOURS;
use crate::entities::{DocumentReport, FareQuote, Field, RateCard, Settlement};
use crate::error::{invalid_invocation_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveType {
    SelfDrive,
    WithDriver,
}

impl DriveType {
    /// Unknown or missing form values fall back to self-drive.
    pub fn from_form(raw: Option<&str>) -> Self {
        match raw {
            Some("with_driver") => Self::WithDriver,
            _ => Self::SelfDrive,
        }
    }

    pub fn with_driver(&self) -> bool {
        matches!(self, Self::WithDriver)
    }

    /// Self-drive hands the keys over, so identity documents are checked.
    pub fn requires_documents(&self) -> bool {
        matches!(self, Self::SelfDrive)
    }
}

impl Default for DriveType {
    fn default() -> Self {
        Self::SelfDrive
    }
}

/// The booking form as posted: every field is an optional raw string.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BookingForm {
    pub drive_type: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub estimated_km: Option<String>,
    pub aadhaar_number: Option<String>,
    pub license_number: Option<String>,
}

/// A coerced draft. Rebuilt from the form on every input event and thrown
/// away after submission; it has no identity of its own.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BookingDraft {
    pub drive_type: DriveType,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub estimated_km: f64,
    pub aadhaar_number: String,
    pub license_number: String,
}

impl BookingDraft {
    /// Total coercion: malformed numbers become 0, malformed timestamps
    /// become absent, unknown drive types become self-drive. A draft never
    /// fails to build.
    pub fn from_form(form: &BookingForm) -> Self {
        Self {
            drive_type: DriveType::from_form(form.drive_type.as_deref()),
            start_time: form.start_time.as_deref().and_then(parse_form_datetime),
            end_time: form.end_time.as_deref().and_then(parse_form_datetime),
            estimated_km: form
                .estimated_km
                .as_deref()
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .filter(|km| km.is_finite())
                .unwrap_or(0.0),
            aadhaar_number: form.aadhaar_number.clone().unwrap_or_default(),
            license_number: form.license_number.clone().unwrap_or_default(),
        }
    }

    /// Hours billed for the drafted window: the span rounded up, floored at
    /// the four-hour minimum. Without both timestamps the minimum applies.
    pub fn billable_hours(&self) -> i64 {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                let minutes = end.signed_duration_since(start).num_minutes();
                let hours = (minutes as f64 / 60.0).ceil() as i64;
                hours.max(MINIMUM_HOURS)
            }
            _ => MINIMUM_HOURS,
        }
    }
}

// datetime-local posts minutes; some user agents include seconds.
fn parse_form_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Everything the booking page needs to render for the current draft,
/// derived in one pass. Rendering is somebody else's idempotent projection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookingView {
    pub fare: FareQuote,
    pub documents: DocumentReport,
    pub self_drive_fields: bool,
    pub driver_info: bool,
}

impl BookingView {
    pub fn project(rates: &RateCard, draft: &BookingDraft) -> Self {
        Self {
            fare: FareQuote::compute(rates, draft),
            documents: DocumentReport::new(&draft.aadhaar_number, &draft.license_number),
            self_drive_fields: draft.drive_type.requires_documents(),
            driver_info: draft.drive_type.with_driver(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub status: Status,
    pub drive_type: DriveType,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub estimated_km: f64,
    pub fare: FareQuote,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Processing {
        ready_at: DateTime<Utc>,
    },
    Confirmed {
        reference: String,
    },
    Returned {
        returned_at: DateTime<Utc>,
        settlement: Settlement,
    },
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Processing { ready_at: _ } => "processing".into(),
            Self::Confirmed { reference: _ } => "confirmed".into(),
            Self::Returned {
                returned_at: _,
                settlement: _,
            } => "returned".into(),
        }
    }
}

impl Booking {
    /// A freshly gated submission. The trigger control stays disabled until
    /// `ready_at`, when the processing window has run its course.
    pub fn new(draft: &BookingDraft, fare: FareQuote, processing: std::time::Duration) -> Self {
        let status = Status::Processing {
            ready_at: Utc::now() + Duration::milliseconds(processing.as_millis() as i64),
        };

        Self {
            id: Uuid::new_v4(),
            status,
            drive_type: draft.drive_type,
            start_time: draft.start_time,
            end_time: draft.end_time,
            estimated_km: draft.estimated_km,
            fare,
        }
    }

    #[tracing::instrument]
    pub fn confirm(&mut self, reference: String) -> Result<(), Error> {
        match self.status {
            Status::Processing { ready_at } => {
                if Utc::now() < ready_at {
                    return Err(invalid_invocation_error());
                }

                self.status = Status::Confirmed { reference };
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument]
    pub fn close(&mut self, damage_reported: bool, damage_fee: f64) -> Result<(), Error> {
        match self.status {
            Status::Confirmed { reference: _ } => {
                let settlement = Settlement::compute(
                    self.fare.total,
                    self.fare.advance_due,
                    damage_reported,
                    damage_fee,
                );

                self.status = Status::Returned {
                    returned_at: Utc::now(),
                    settlement,
                };
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }
}

/// Outcome of a submission attempt, as the page should render it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Submission {
    Rejected {
        focus: Field,
        report: DocumentReport,
    },
    Confirmed {
        booking: Booking,
    },
}

impl Submission {
    /// The gate, as a pure function: a self-drive draft with documents that
    /// do not check out is turned away here, before any processing starts.
    pub fn screen(draft: &BookingDraft) -> Option<DocumentReport> {
        if !draft.drive_type.requires_documents() {
            return None;
        }

        let report = DocumentReport::new(&draft.aadhaar_number, &draft.license_number);

        if report.is_valid() {
            return None;
        }

        Some(report)
    }

    pub fn rejected(report: DocumentReport) -> Self {
        let focus = report.first_invalid().unwrap_or(Field::Aadhaar);

        Self::Rejected { focus, report }
    }
}

#[test]
fn draft_coerces_malformed_input_to_defaults() {
    let form = BookingForm {
        drive_type: Some("chauffeur".into()),
        start_time: Some("yesterday".into()),
        end_time: None,
        estimated_km: Some("abc".into()),
        aadhaar_number: None,
        license_number: None,
    };

    let draft = BookingDraft::from_form(&form);

    assert_eq!(draft.drive_type, DriveType::SelfDrive);
    assert_eq!(draft.start_time, None);
    assert_eq!(draft.estimated_km, 0.0);
    assert_eq!(draft.billable_hours(), 4);
}

#[test]
fn billable_hours_round_up_and_floor_at_four() {
    let form = BookingForm {
        start_time: Some("2024-01-01T00:00".into()),
        end_time: Some("2024-01-01T06:30".into()),
        ..BookingForm::default()
    };

    assert_eq!(BookingDraft::from_form(&form).billable_hours(), 7);

    let backwards = BookingForm {
        start_time: Some("2024-01-01T06:00".into()),
        end_time: Some("2024-01-01T00:00".into()),
        ..BookingForm::default()
    };

    assert_eq!(BookingDraft::from_form(&backwards).billable_hours(), 4);
}

#[test]
fn screen_turns_away_self_drive_drafts_with_bad_documents() {
    let mut draft = BookingDraft::default();
    draft.aadhaar_number = "12345".into();
    draft.license_number = "AB123".into();

    let report = Submission::screen(&draft).unwrap();
    assert_eq!(report.first_invalid(), Some(Field::Aadhaar));

    // with a driver, documents are not checked at all
    draft.drive_type = DriveType::WithDriver;
    assert!(Submission::screen(&draft).is_none());

    draft.drive_type = DriveType::SelfDrive;
    draft.aadhaar_number = "123456789012".into();
    assert!(Submission::screen(&draft).is_none());
}

#[test]
fn booking_confirms_only_after_the_processing_window() {
    use crate::entities::RateCard;

    let rates = RateCard {
        per_hour: 200.0,
        per_km: 12.5,
    };
    let draft = BookingDraft::default();
    let fare = FareQuote::compute(&rates, &draft);

    let mut waiting = Booking::new(&draft, fare.clone(), std::time::Duration::from_secs(3600));
    assert!(waiting.confirm("DE-000001".into()).is_err());

    let mut ready = Booking::new(&draft, fare, std::time::Duration::from_secs(0));
    ready.confirm("DE-000001".into()).unwrap();
    assert_eq!(ready.status.name(), "confirmed");

    // a booking cannot be confirmed twice
    assert!(ready.confirm("DE-000002".into()).is_err());
}

#[test]
fn booking_closes_with_a_settlement() {
    use crate::entities::RateCard;

    let rates = RateCard {
        per_hour: 200.0,
        per_km: 12.5,
    };
    let draft = BookingDraft::default();
    let fare = FareQuote::compute(&rates, &draft);

    let mut booking = Booking::new(&draft, fare, std::time::Duration::from_secs(0));

    // cannot return a booking that was never confirmed
    assert!(booking.clone().close(false, 0.0).is_err());

    booking.confirm("DE-000003".into()).unwrap();
    booking.close(true, 150.0).unwrap();

    match &booking.status {
        Status::Returned {
            returned_at: _,
            settlement,
        } => {
            assert_eq!(settlement.grand_total, 950.0);
            assert_eq!(settlement.pending_due, 950.0 - 160.0);
        }
        other => panic!("unexpected status {:?}", other),
    }
}
