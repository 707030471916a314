pub mod database_service;
pub mod organisation;
pub mod user;
