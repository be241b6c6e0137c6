use sqlx::SqlitePool;

use crate::models::MatchRow;

pub struct NewMatch<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub stop_id: Option<&'a str>,
    pub home_team: &'a str,
    pub away_team: &'a str,
    pub venue: Option<&'a str>,
    pub kickoff_at: Option<&'a str>,
    pub stage: Option<&'a str>,
    pub ticket_status: Option<&'a str>,
}

const SQL_INSERT_MATCH: &str = r#"
INSERT INTO matches (id, trip_id, stop_id, home_team, away_team, venue, kickoff_at, stage, ticket_status)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

pub async fn insert_match(pool: &SqlitePool, m: NewMatch<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_MATCH)
        .bind(m.id)
        .bind(m.trip_id)
        .bind(m.stop_id)
        .bind(m.home_team)
        .bind(m.away_team)
        .bind(m.venue)
        .bind(m.kickoff_at)
        .bind(m.stage)
        .bind(m.ticket_status)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_MATCHES: &str = r#"
SELECT id, trip_id, stop_id, home_team, away_team, venue, kickoff_at, stage, ticket_status, created_at
FROM matches
WHERE trip_id = ?1
ORDER BY kickoff_at ASC, id ASC
"#;

pub async fn list_matches(pool: &SqlitePool, trip_id: &str) -> sqlx::Result<Vec<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(SQL_LIST_MATCHES)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_MATCH_IN_TRIP: &str = r#"
SELECT id, trip_id, stop_id, home_team, away_team, venue, kickoff_at, stage, ticket_status, created_at
FROM matches
WHERE id = ?1 AND trip_id = ?2
LIMIT 1
"#;

pub async fn get_match_in_trip(
    pool: &SqlitePool,
    match_id: &str,
    trip_id: &str,
) -> sqlx::Result<Option<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(SQL_GET_MATCH_IN_TRIP)
        .bind(match_id)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

pub struct UpdateMatch<'a> {
    pub stop_id: Option<&'a str>,
    pub home_team: Option<&'a str>,
    pub away_team: Option<&'a str>,
    pub venue: Option<&'a str>,
    pub kickoff_at: Option<&'a str>,
    pub stage: Option<&'a str>,
    pub ticket_status: Option<&'a str>,
}

const SQL_UPDATE_MATCH: &str = r#"
UPDATE matches SET
  stop_id = COALESCE(?3, stop_id),
  home_team = COALESCE(?4, home_team),
  away_team = COALESCE(?5, away_team),
  venue = COALESCE(?6, venue),
  kickoff_at = COALESCE(?7, kickoff_at),
  stage = COALESCE(?8, stage),
  ticket_status = COALESCE(?9, ticket_status)
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn update_match(
    pool: &SqlitePool,
    match_id: &str,
    trip_id: &str,
    update: UpdateMatch<'_>,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_UPDATE_MATCH)
        .bind(match_id)
        .bind(trip_id)
        .bind(update.stop_id)
        .bind(update.home_team)
        .bind(update.away_team)
        .bind(update.venue)
        .bind(update.kickoff_at)
        .bind(update.stage)
        .bind(update.ticket_status)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

const SQL_DELETE_MATCH: &str = r#"
DELETE FROM matches
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn delete_match(pool: &SqlitePool, match_id: &str, trip_id: &str) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_DELETE_MATCH)
        .bind(match_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
