use sqlx::SqlitePool;

use crate::models::PredictionRow;

pub struct NewPrediction<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub traveler_id: &'a str,
    pub match_id: &'a str,
    pub home_score: i64,
    pub away_score: i64,
}

// One prediction per traveler per match; re-submitting replaces the scores.
const SQL_UPSERT_PREDICTION: &str = r#"
INSERT INTO predictions (id, trip_id, traveler_id, match_id, home_score, away_score)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
ON CONFLICT(trip_id, traveler_id, match_id) DO UPDATE SET
  home_score = excluded.home_score,
  away_score = excluded.away_score,
  updated_at = datetime('now')
"#;

pub async fn upsert_prediction(pool: &SqlitePool, p: NewPrediction<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_UPSERT_PREDICTION)
        .bind(p.id)
        .bind(p.trip_id)
        .bind(p.traveler_id)
        .bind(p.match_id)
        .bind(p.home_score)
        .bind(p.away_score)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_PREDICTIONS: &str = r#"
SELECT id, trip_id, traveler_id, match_id, home_score, away_score, created_at, updated_at
FROM predictions
WHERE trip_id = ?1
ORDER BY match_id, traveler_id
"#;

pub async fn list_predictions(
    pool: &SqlitePool,
    trip_id: &str,
) -> sqlx::Result<Vec<PredictionRow>> {
    sqlx::query_as::<_, PredictionRow>(SQL_LIST_PREDICTIONS)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_DELETE_PREDICTION: &str = r#"
DELETE FROM predictions
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn delete_prediction(
    pool: &SqlitePool,
    prediction_id: &str,
    trip_id: &str,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_DELETE_PREDICTION)
        .bind(prediction_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
