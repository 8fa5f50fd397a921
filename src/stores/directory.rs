use crate::models::user::{Role, User};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory user directory
pub struct UserDirectory {
    users: DashMap<String, Arc<User>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Add a user to the directory
    /// If a user with the same id already exists, it will be replaced
    pub fn add_user(&self, user: User) {
        self.users.insert(user.id.clone(), Arc::new(user));
    }

    /// Get a user by id
    pub fn get_user(&self, id: &str) -> Option<Arc<User>> {
        self.users.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Get a user by exact email match
    /// Note: This is a linear search and should be used sparingly
    pub fn find_by_email(&self, email: &str) -> Option<Arc<User>> {
        self.users
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Switch a user's role to agent and assign the given referral code.
    /// Returns the updated record, or None when the id is unknown.
    /// Calling this again overwrites the code with the new one.
    pub fn upgrade_to_agent(&self, id: &str, agent_code: String) -> Option<Arc<User>> {
        let mut entry = self.users.get_mut(id)?;
        let mut user = (**entry.value()).clone();
        user.role = Role::Agent;
        user.agent_code = Some(agent_code);

        let user = Arc::new(user);
        *entry.value_mut() = Arc::clone(&user);
        Some(user)
    }

    /// Number of users holding the given role
    pub fn count_by_role(&self, role: Role) -> usize {
        self.users
            .iter()
            .filter(|entry| entry.value().role == role)
            .count()
    }

    pub fn list(&self) -> Vec<Arc<User>> {
        let mut users: Vec<Arc<User>> = self
            .users
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
