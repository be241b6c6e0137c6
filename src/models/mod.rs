pub mod accommodations;
pub mod activity_log;
pub mod checklist_items;
pub mod expenses;
pub mod itinerary_items;
pub mod matches;
pub mod notes;
pub mod photos;
pub mod polls;
pub mod predictions;
pub mod stops;
pub mod travelers;
pub mod trips;

pub use accommodations::AccommodationRow;
pub use activity_log::ActivityLogRow;
pub use checklist_items::ChecklistItemRow;
pub use expenses::{ExpenseRow, ExpenseSplitRow};
pub use itinerary_items::ItineraryItemRow;
pub use matches::MatchRow;
pub use notes::NoteRow;
pub use photos::PhotoRow;
pub use polls::{PollOptionRow, PollRow, PollVoteRow};
pub use predictions::PredictionRow;
pub use stops::StopRow;
pub use travelers::TravelerRow;
pub use trips::TripRow;
