pub mod activity_log_service;
pub mod backup_service;
pub mod calendar_service;
pub mod expense_service;
pub mod poll_service;
pub mod settlement_service;
pub mod trip_service;
