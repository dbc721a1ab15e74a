//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller-supplied user identifier
pub type UserId = i64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier, chosen by the client at creation
    #[schema(example = 3)]
    pub id: UserId,
    /// Full name, stored as one opaque string
    #[schema(example = "Mikhail Vasilevich Lomonosov")]
    pub full_name: String,
}

impl User {
    /// Create a new user
    pub fn new(id: UserId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }

    /// Replace the user's full name
    pub fn rename(&mut self, full_name: String) {
        self.full_name = full_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_id_and_full_name() {
        let user = User::new(3, "Mikhail Vasilevich Lomonosov");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "full_name": "Mikhail Vasilevich Lomonosov" })
        );
    }

    #[test]
    fn rename_keeps_id() {
        let mut user = User::new(7, "Pyotr Pervy");
        user.rename("Aleksandr Sergeevich Pushkin".to_string());
        assert_eq!(user.id, 7);
        assert_eq!(user.full_name, "Aleksandr Sergeevich Pushkin");
    }
}
