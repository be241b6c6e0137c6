use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::polls_repo;
use crate::models::PollRow;

#[derive(Debug, Serialize)]
pub struct PollOptionView {
    pub id: String,
    pub label: String,
    pub position: i64,
    pub votes: i64,
}

#[derive(Debug, Serialize)]
pub struct PollView {
    pub id: String,
    pub question: String,
    pub multi: bool,
    pub closed: bool,
    pub created_by: Option<String>,
    pub created_at: String,
    pub options: Vec<PollOptionView>,
    pub my_votes: Vec<String>,
}

pub async fn create_poll(
    pool: &SqlitePool,
    trip_id: &str,
    created_by: &str,
    question: &str,
    options: &[String],
    multi: bool,
) -> sqlx::Result<PollRow> {
    let poll_id = Uuid::now_v7().to_string();
    polls_repo::insert_poll(
        pool,
        polls_repo::NewPoll {
            id: &poll_id,
            trip_id,
            question,
            multi: multi as i64,
            created_by: Some(created_by),
        },
    )
    .await?;

    for (position, label) in options.iter().enumerate() {
        let option_id = Uuid::now_v7().to_string();
        polls_repo::insert_poll_option(pool, &option_id, &poll_id, label, position as i64).await?;
    }

    polls_repo::get_poll_in_trip(pool, &poll_id, trip_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

#[derive(Debug)]
pub enum VoteError {
    PollNotFound,
    OptionNotFound,
    PollClosed,
    Db(sqlx::Error),
}

impl From<sqlx::Error> for VoteError {
    fn from(e: sqlx::Error) -> Self {
        VoteError::Db(e)
    }
}

/// Single-choice polls replace the traveler's previous vote; multi-choice
/// polls accumulate one vote per option.
pub async fn cast_vote(
    pool: &SqlitePool,
    trip_id: &str,
    poll_id: &str,
    traveler_id: &str,
    option_id: &str,
) -> Result<(), VoteError> {
    let Some(poll) = polls_repo::get_poll_in_trip(pool, poll_id, trip_id).await? else {
        return Err(VoteError::PollNotFound);
    };
    if poll.closed != 0 {
        return Err(VoteError::PollClosed);
    }
    if polls_repo::get_option_in_poll(pool, option_id, poll_id)
        .await?
        .is_none()
    {
        return Err(VoteError::OptionNotFound);
    }

    if poll.multi == 0 {
        polls_repo::delete_votes_by_traveler(pool, poll_id, traveler_id).await?;
    }
    let vote_id = Uuid::now_v7().to_string();
    polls_repo::insert_vote(pool, &vote_id, poll_id, option_id, traveler_id).await?;
    Ok(())
}

pub async fn list_polls_with_results(
    pool: &SqlitePool,
    trip_id: &str,
    viewer_id: &str,
) -> sqlx::Result<Vec<PollView>> {
    let polls = polls_repo::list_polls(pool, trip_id).await?;
    let options = polls_repo::list_options_for_trip(pool, trip_id).await?;
    let votes = polls_repo::list_votes_for_trip(pool, trip_id).await?;

    Ok(polls
        .into_iter()
        .map(|poll| {
            let poll_options = options
                .iter()
                .filter(|o| o.poll_id == poll.id)
                .map(|o| PollOptionView {
                    id: o.id.clone(),
                    label: o.label.clone(),
                    position: o.position,
                    votes: votes
                        .iter()
                        .filter(|v| v.option_id == o.id)
                        .count() as i64,
                })
                .collect();
            let my_votes = votes
                .iter()
                .filter(|v| v.poll_id == poll.id && v.traveler_id == viewer_id)
                .map(|v| v.option_id.clone())
                .collect();
            PollView {
                id: poll.id,
                question: poll.question,
                multi: poll.multi != 0,
                closed: poll.closed != 0,
                created_by: poll.created_by,
                created_at: poll.created_at,
                options: poll_options,
                my_votes,
            }
        })
        .collect())
}
