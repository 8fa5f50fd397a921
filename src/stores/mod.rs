pub mod course_catalog;
pub mod directory;
pub mod package_catalog;
pub mod progress_store;
pub mod registration_ledger;
