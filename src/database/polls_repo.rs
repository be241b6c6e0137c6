use sqlx::SqlitePool;

use crate::models::{PollOptionRow, PollRow, PollVoteRow};

pub struct NewPoll<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub question: &'a str,
    pub multi: i64,
    pub created_by: Option<&'a str>,
}

const SQL_INSERT_POLL: &str = r#"
INSERT INTO polls (id, trip_id, question, multi, created_by)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub async fn insert_poll(pool: &SqlitePool, poll: NewPoll<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_POLL)
        .bind(poll.id)
        .bind(poll.trip_id)
        .bind(poll.question)
        .bind(poll.multi)
        .bind(poll.created_by)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_INSERT_POLL_OPTION: &str = r#"
INSERT INTO poll_options (id, poll_id, label, position)
VALUES (?1, ?2, ?3, ?4)
"#;

pub async fn insert_poll_option(
    pool: &SqlitePool,
    id: &str,
    poll_id: &str,
    label: &str,
    position: i64,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_POLL_OPTION)
        .bind(id)
        .bind(poll_id)
        .bind(label)
        .bind(position)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_POLLS: &str = r#"
SELECT id, trip_id, question, multi, closed, created_by, created_at
FROM polls
WHERE trip_id = ?1
ORDER BY id DESC
"#;

pub async fn list_polls(pool: &SqlitePool, trip_id: &str) -> sqlx::Result<Vec<PollRow>> {
    sqlx::query_as::<_, PollRow>(SQL_LIST_POLLS)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_POLL_IN_TRIP: &str = r#"
SELECT id, trip_id, question, multi, closed, created_by, created_at
FROM polls
WHERE id = ?1 AND trip_id = ?2
LIMIT 1
"#;

pub async fn get_poll_in_trip(
    pool: &SqlitePool,
    poll_id: &str,
    trip_id: &str,
) -> sqlx::Result<Option<PollRow>> {
    sqlx::query_as::<_, PollRow>(SQL_GET_POLL_IN_TRIP)
        .bind(poll_id)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

const SQL_LIST_OPTIONS_FOR_TRIP: &str = r#"
SELECT o.id, o.poll_id, o.label, o.position
FROM poll_options o
JOIN polls p ON p.id = o.poll_id
WHERE p.trip_id = ?1
ORDER BY o.poll_id, o.position ASC, o.id ASC
"#;

pub async fn list_options_for_trip(
    pool: &SqlitePool,
    trip_id: &str,
) -> sqlx::Result<Vec<PollOptionRow>> {
    sqlx::query_as::<_, PollOptionRow>(SQL_LIST_OPTIONS_FOR_TRIP)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_OPTION_IN_POLL: &str = r#"
SELECT id, poll_id, label, position
FROM poll_options
WHERE id = ?1 AND poll_id = ?2
LIMIT 1
"#;

pub async fn get_option_in_poll(
    pool: &SqlitePool,
    option_id: &str,
    poll_id: &str,
) -> sqlx::Result<Option<PollOptionRow>> {
    sqlx::query_as::<_, PollOptionRow>(SQL_GET_OPTION_IN_POLL)
        .bind(option_id)
        .bind(poll_id)
        .fetch_optional(pool)
        .await
}

const SQL_LIST_VOTES_FOR_TRIP: &str = r#"
SELECT v.id, v.poll_id, v.option_id, v.traveler_id, v.created_at
FROM poll_votes v
JOIN polls p ON p.id = v.poll_id
WHERE p.trip_id = ?1
ORDER BY v.id ASC
"#;

pub async fn list_votes_for_trip(
    pool: &SqlitePool,
    trip_id: &str,
) -> sqlx::Result<Vec<PollVoteRow>> {
    sqlx::query_as::<_, PollVoteRow>(SQL_LIST_VOTES_FOR_TRIP)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_DELETE_VOTES_BY_TRAVELER: &str = r#"
DELETE FROM poll_votes
WHERE poll_id = ?1 AND traveler_id = ?2
"#;

pub async fn delete_votes_by_traveler(
    pool: &SqlitePool,
    poll_id: &str,
    traveler_id: &str,
) -> sqlx::Result<()> {
    sqlx::query(SQL_DELETE_VOTES_BY_TRAVELER)
        .bind(poll_id)
        .bind(traveler_id)
        .execute(pool)
        .await?;
    Ok(())
}

// The UNIQUE(poll_id, option_id, traveler_id) index makes a repeated
// multi-choice vote a no-op instead of a duplicate row.
const SQL_INSERT_VOTE: &str = r#"
INSERT INTO poll_votes (id, poll_id, option_id, traveler_id)
VALUES (?1, ?2, ?3, ?4)
ON CONFLICT(poll_id, option_id, traveler_id) DO NOTHING
"#;

pub async fn insert_vote(
    pool: &SqlitePool,
    id: &str,
    poll_id: &str,
    option_id: &str,
    traveler_id: &str,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_VOTE)
        .bind(id)
        .bind(poll_id)
        .bind(option_id)
        .bind(traveler_id)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_CLOSE_POLL: &str = r#"
UPDATE polls SET closed = 1
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn close_poll(pool: &SqlitePool, poll_id: &str, trip_id: &str) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_CLOSE_POLL)
        .bind(poll_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

const SQL_DELETE_POLL_VOTES: &str = "DELETE FROM poll_votes WHERE poll_id = ?1";
const SQL_DELETE_POLL_OPTIONS: &str = "DELETE FROM poll_options WHERE poll_id = ?1";
const SQL_DELETE_POLL: &str = "DELETE FROM polls WHERE id = ?1 AND trip_id = ?2";

pub async fn delete_poll(pool: &SqlitePool, poll_id: &str, trip_id: &str) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_DELETE_POLL)
        .bind(poll_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    if result.rows_affected() > 0 {
        sqlx::query(SQL_DELETE_POLL_VOTES)
            .bind(poll_id)
            .execute(pool)
            .await?;
        sqlx::query(SQL_DELETE_POLL_OPTIONS)
            .bind(poll_id)
            .execute(pool)
            .await?;
    }
    Ok(result.rows_affected())
}
