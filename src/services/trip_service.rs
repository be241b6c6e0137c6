use serde_json::{json, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::{stops_repo, travelers_repo, trips_repo};
use crate::models::{TravelerRow, TripRow};

/// Join codes are short, uppercase, and unambiguous enough for a group chat.
/// Collisions hit the UNIQUE index on trips.code and surface as a 500; at
/// tens of trips per database that is acceptable.
pub fn generate_join_code() -> String {
    Uuid::new_v4().simple().to_string()[..6].to_uppercase()
}

pub async fn create_trip(
    pool: &SqlitePool,
    name: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> sqlx::Result<TripRow> {
    let id = Uuid::now_v7().to_string();
    let code = generate_join_code();
    trips_repo::insert_trip(
        pool,
        trips_repo::NewTrip {
            id: &id,
            name,
            code: &code,
            start_date,
            end_date,
        },
    )
    .await?;
    trips_repo::get_trip(pool, &id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Looks up the trip by join code and finds or creates the traveler by name
/// (case-insensitive), so rejoining from a new device picks up the same
/// identity.
pub async fn join_trip(
    pool: &SqlitePool,
    code: &str,
    traveler_name: &str,
) -> sqlx::Result<Option<(TripRow, TravelerRow)>> {
    let Some(trip) = trips_repo::find_trip_by_code(pool, code).await? else {
        return Ok(None);
    };

    if let Some(traveler) =
        travelers_repo::find_traveler_by_name(pool, &trip.id, traveler_name).await?
    {
        return Ok(Some((trip, traveler)));
    }

    let traveler_id = Uuid::now_v7().to_string();
    travelers_repo::insert_traveler(
        pool,
        travelers_repo::NewTraveler {
            id: &traveler_id,
            trip_id: &trip.id,
            name: traveler_name,
            color: None,
        },
    )
    .await?;
    let traveler = travelers_repo::get_traveler_in_trip(pool, &traveler_id, &trip.id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;
    Ok(Some((trip, traveler)))
}

pub async fn trip_overview(pool: &SqlitePool, trip_id: &str) -> sqlx::Result<Option<Value>> {
    let Some(trip) = trips_repo::get_trip(pool, trip_id).await? else {
        return Ok(None);
    };
    let travelers = travelers_repo::list_travelers(pool, trip_id).await?;
    let stops = stops_repo::list_stops(pool, trip_id).await?;
    Ok(Some(json!({
        "trip": trip,
        "travelers": travelers,
        "stops": stops,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_code_is_six_uppercase_chars() {
        let code = generate_join_code();
        assert_eq!(code.len(), 6);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
