pub mod ids;
pub mod password;
pub mod payload;
pub mod token;
pub mod webutils;
