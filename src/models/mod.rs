pub mod api;
pub mod course;
pub mod package;
pub mod registration;
pub mod user;
