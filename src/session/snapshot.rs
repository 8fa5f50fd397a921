use crate::models::user::User;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Storage key the session user is filed under inside the snapshot
const SESSION_KEY: &str = "manasik_user";

#[derive(Serialize, Deserialize)]
struct SnapshotFile {
    #[serde(flatten)]
    entries: HashMap<String, User>,
}

/// Durable session snapshot: one JSON object holding the serialized
/// session user under a fixed key. Written wholesale on login and
/// self-upgrade, removed on logout, read once at startup.
/// Last writer wins; there is no merge.
pub struct SessionSnapshot {
    path: PathBuf,
}

impl SessionSnapshot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Overwrite the snapshot with the given user
    pub fn save(&self, user: &User) -> Result<()> {
        let mut entries = HashMap::new();
        entries.insert(SESSION_KEY.to_string(), user.clone());

        let json = serde_json::to_string(&SnapshotFile { entries })
            .context("Failed to serialize session snapshot")?;
        std::fs::write(&self.path, json).context(format!(
            "Failed to write session snapshot: {}",
            self.path.display()
        ))?;
        Ok(())
    }

    /// Remove the snapshot. Missing file is fine.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(format!(
                "Failed to remove session snapshot: {}",
                self.path.display()
            )),
        }
    }

    /// Read the snapshot back. A missing file means no saved session;
    /// an unreadable one is logged and treated the same way.
    pub fn load(&self) -> Result<Option<User>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).context(format!(
                    "Failed to read session snapshot: {}",
                    self.path.display()
                ))
            }
        };

        match serde_json::from_str::<SnapshotFile>(&content) {
            Ok(mut snapshot) => Ok(snapshot.entries.remove(SESSION_KEY)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to parse session snapshot, starting without a session"
                );
                Ok(None)
            }
        }
    }
}
