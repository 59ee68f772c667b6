use super::Database;

use rand::Rng;
use sqlx::{types::Json, Executor, Pool, Row};

use crate::error::Error;

/// The single persisted key: the last completed booking form, overwritten on
/// every submission.
pub const LAST_BOOKING_KEY: &str = "lastBooking";

#[tracing::instrument(skip(pool, data))]
pub async fn write_snapshot(
    pool: &Pool<Database>,
    key: &str,
    data: &serde_json::Value,
) -> Result<(), Error> {
    let mut conn = pool.acquire().await?;

    conn.execute(
        sqlx::query(
            "INSERT INTO snapshots (key, data) VALUES ($1, $2) ON CONFLICT (key) DO UPDATE SET data = excluded.data",
        )
        .bind(key)
        .bind(Json(data)),
    )
    .await?;

    Ok(())
}

#[tracing::instrument(skip(pool))]
pub async fn read_snapshot(
    pool: &Pool<Database>,
    key: &str,
) -> Result<Option<serde_json::Value>, Error> {
    let mut conn = pool.acquire().await?;

    let maybe_result = conn
        .fetch_optional(sqlx::query("SELECT data FROM snapshots WHERE key = $1").bind(key))
        .await?;

    match maybe_result {
        Some(result) => {
            let Json(data) = result.try_get("data")?;
            Ok(Some(data))
        }
        None => Ok(None),
    }
}

/// Confirmation references look like DE-483920.
pub fn new_reference() -> String {
    format!("DE-{}", rand::thread_rng().gen_range(0..1_000_000))
}

#[test]
fn references_carry_the_booking_prefix() {
    for _ in 0..32 {
        let reference = new_reference();

        let digits = reference.strip_prefix("DE-").unwrap();
        assert!(digits.parse::<u32>().unwrap() < 1_000_000);
    }
}
