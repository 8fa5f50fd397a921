use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::core::state::AppState;
use crate::seed::data;

// this runs at boot time
pub fn apply_seed_data(state: &AppState) {
    for user in data::users() {
        state.directory.add_user(user);
    }

    for package in data::packages() {
        state.packages.add_package(package);
    }

    for registration in data::registrations() {
        state.registrations.add_registration(registration);
    }

    for course in data::courses() {
        state.courses.add_course(course);
    }

    info!(
        users = state.directory.len(),
        packages = state.packages.len(),
        registrations = state.registrations.len(),
        courses = state.courses.len(),
        "Seed catalog applied"
    );
}

/// Restore the login session saved by a previous run, if any.
/// The snapshot is taken as-is; it is not reconciled with the directory.
pub fn restore_session(state: &AppState) -> Result<()> {
    match state.snapshot.load()? {
        Some(user) => {
            info!(user_id = %user.id, role = ?user.role, "Restored session from snapshot");
            state.session.sign_in(Arc::new(user));
        }
        None => {
            info!("No saved session to restore");
        }
    }
    Ok(())
}
