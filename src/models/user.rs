use serde::{Deserialize, Serialize};

/// Portal roles. Every user holds exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Pilgrim,
    Agent,
    BranchManager,
    Treasurer,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: String,
    /// Login email, unique within the directory
    pub email: String,
    /// Display name
    pub name: String,
    pub role: Role,
    /// Branch affiliation, when the user belongs to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    /// Referral code, assigned when the user becomes an agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role,
            branch_id: None,
            agent_code: None,
            phone: None,
        }
    }
}
