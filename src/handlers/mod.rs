pub mod auth;
pub mod courses;
pub mod fallback;
pub mod health;
pub mod packages;
pub mod registrations;
pub mod summary;
pub mod upgrade;
