pub mod refresh_status;
pub mod refresh_status_repository;
