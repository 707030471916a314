pub mod add_user;
pub mod create;
pub mod get;
pub mod list;
