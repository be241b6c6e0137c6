pub mod accommodations_repo;
pub mod activity_log_repo;
pub mod checklist_repo;
pub mod expenses_repo;
pub mod itinerary_repo;
pub mod matches_repo;
pub mod notes_repo;
pub mod photos_repo;
pub mod polls_repo;
pub mod predictions_repo;
pub mod schema;
pub mod stops_repo;
pub mod travelers_repo;
pub mod trips_repo;
