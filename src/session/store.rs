use crate::models::user::User;
use std::sync::{Arc, RwLock};

/// The active login session. At most one user is signed in at a time;
/// there is exactly one logical actor driving the portal.
pub struct SessionStore {
    current: RwLock<Option<Arc<User>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// The signed-in user, if any
    pub fn current(&self) -> Option<Arc<User>> {
        self.current.read().unwrap().clone()
    }

    pub fn sign_in(&self, user: Arc<User>) {
        *self.current.write().unwrap() = Some(user);
    }

    pub fn sign_out(&self) {
        *self.current.write().unwrap() = None;
    }

    /// Swap in a fresh copy of the session user (after a role upgrade).
    /// Does nothing when the given record is not the session user.
    pub fn refresh(&self, user: Arc<User>) -> bool {
        let mut current = self.current.write().unwrap();
        match current.as_ref() {
            Some(signed_in) if signed_in.id == user.id => {
                *current = Some(user);
                true
            }
            _ => false,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.read().unwrap().is_some()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
