use serde::{Deserialize, Serialize};

use crate::entities::fare::round2;
use crate::entities::RateCard;

/// A one-shot fare estimate for a route, priced both by distance and by
/// travel time; the higher figure is quoted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistanceQuote {
    pub origin: String,
    pub destination: String,
    pub distance_text: String,
    pub duration_text: String,
    pub distance_km: f64,
    pub duration_hours: f64,
    pub distance_fare: f64,
    pub time_fare: f64,
    pub estimated_fare: f64,
}

impl DistanceQuote {
    pub fn compute(
        rates: &RateCard,
        origin: String,
        destination: String,
        distance_text: String,
        duration_text: String,
        distance_meters: i64,
        duration_seconds: i64,
    ) -> Self {
        let distance_km = distance_meters as f64 / 1000.0;
        let duration_hours = duration_seconds as f64 / 3600.0;

        let distance_fare = round2(distance_km * rates.per_km);
        let time_fare = round2(duration_hours * rates.per_hour);

        Self {
            origin,
            destination,
            distance_text,
            duration_text,
            distance_km,
            duration_hours,
            distance_fare,
            time_fare,
            estimated_fare: distance_fare.max(time_fare),
        }
    }
}

#[test]
fn the_higher_of_distance_and_time_fare_is_quoted() {
    let rates = RateCard {
        per_hour: 200.0,
        per_km: 12.5,
    };

    let quote = DistanceQuote::compute(
        &rates,
        "Vijayawada".into(),
        "Guntur".into(),
        "100 km".into(),
        "2 hours".into(),
        100_000,
        7_200,
    );

    assert_eq!(quote.distance_km, 100.0);
    assert_eq!(quote.duration_hours, 2.0);
    assert_eq!(quote.distance_fare, 1250.0);
    assert_eq!(quote.time_fare, 400.0);
    assert_eq!(quote.estimated_fare, 1250.0);
}
