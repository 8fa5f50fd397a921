use crate::session::snapshot::SessionSnapshot;
use crate::session::store::SessionStore;
use crate::stores::directory::UserDirectory;
use crate::utils::ids::agent_code;
use crate::utils::time::current_timestamp_millis;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{info, warn};

/// Schedules the delayed agent upgrade that follows a membership payment.
///
/// The delay stands in for payment verification. One task may be pending
/// per user; scheduling again replaces it, and a pending task can be
/// cancelled (logout does this for the session user). When the task fires
/// it flips the role, assigns a fresh time-based referral code, and, when
/// the target is the session user, refreshes both the in-memory session and
/// the durable snapshot.
pub struct UpgradeScheduler {
    directory: Arc<UserDirectory>,
    session: Arc<SessionStore>,
    snapshot: Arc<SessionSnapshot>,
    pending: Arc<DashMap<String, AbortHandle>>,
}

impl UpgradeScheduler {
    pub fn new(
        directory: Arc<UserDirectory>,
        session: Arc<SessionStore>,
        snapshot: Arc<SessionSnapshot>,
    ) -> Self {
        Self {
            directory,
            session,
            snapshot,
            pending: Arc::new(DashMap::new()),
        }
    }

    /// Queue the upgrade to run once after `delay`.
    /// A task already pending for the same user is replaced.
    pub fn schedule(&self, user_id: &str, delay: Duration) -> JoinHandle<()> {
        if let Some((_, previous)) = self.pending.remove(user_id) {
            previous.abort();
            info!(user_id, "Replaced pending agent upgrade");
        }

        let directory = Arc::clone(&self.directory);
        let session = Arc::clone(&self.session);
        let snapshot = Arc::clone(&self.snapshot);
        let pending = Arc::clone(&self.pending);
        let user_id = user_id.to_string();
        let pending_key = user_id.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let code = agent_code(current_timestamp_millis());
            match directory.upgrade_to_agent(&user_id, code.clone()) {
                Some(user) => {
                    if session.refresh(Arc::clone(&user)) {
                        if let Err(e) = snapshot.save(&user) {
                            warn!(
                                user_id = %user.id,
                                error = %e,
                                "Failed to persist session after agent upgrade"
                            );
                        }
                    }
                    info!(user_id = %user.id, agent_code = %code, "Agent upgrade applied");
                }
                None => {
                    warn!(user_id = %user_id, "Agent upgrade fired for unknown user");
                }
            }

            pending.remove(&user_id);
        });

        self.pending
            .insert(pending_key, handle.abort_handle());
        handle
    }

    /// Abort a pending upgrade. Returns whether one was pending.
    pub fn cancel(&self, user_id: &str) -> bool {
        match self.pending.remove(user_id) {
            Some((_, handle)) => {
                handle.abort();
                info!(user_id, "Cancelled pending agent upgrade");
                true
            }
            None => false,
        }
    }

    pub fn has_pending(&self, user_id: &str) -> bool {
        self.pending.contains_key(user_id)
    }
}
