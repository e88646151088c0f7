//! Account projection returned to callers.

use serde::{Deserialize, Serialize};

use crate::domain::entities::account::Account;

/// Projection of an [`Account`] safe to hand to callers
///
/// Only a single role is surfaced even when the account holds several; this
/// mirrors what the rest of the system expects from the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    /// Account id as a string
    pub id: String,

    /// Login name
    pub username: String,

    /// Display name, if one was provided at registration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email address, if one was provided at registration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The surfaced role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AccountData {
    /// Projects an account, surfacing the given role
    pub fn from_account(account: &Account, role: Option<&str>) -> Self {
        Self {
            id: account.id.to_string(),
            username: account.username.clone(),
            name: account.display_name.clone(),
            email: account.email.clone(),
            role: role.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_carries_single_role() {
        let mut account = Account::new(
            "alice".to_string(),
            Some("Alice".to_string()),
            None,
        );
        account.assign_role("User");
        account.assign_role("Manager");

        let data = AccountData::from_account(&account, account.primary_role());

        assert_eq!(data.username, "alice");
        assert_eq!(data.role.as_deref(), Some("User"));
    }

    #[test]
    fn test_optional_fields_skipped_when_absent() {
        let account = Account::new("bob".to_string(), None, None);
        let data = AccountData::from_account(&account, None);

        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("name").is_none());
        assert!(json.get("email").is_none());
        assert!(json.get("role").is_none());
    }
}
