//! Wire messages for the user lookup endpoints
//!
//! These are the schema-defined shapes exchanged with callers. Both are
//! pure value types: equality is field equality, and a field missing from
//! the wire decodes to its zero value.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// A user lookup request, identified by numeric id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub id: i64,
}

/// The result of a user lookup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_superuser: bool,
}

impl From<User> for UserResponse {
    /// Project the persisted entity onto the wire shape, dropping
    /// credential and status fields.
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            is_superuser: user.is_superuser,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 42,
            username: "maria".to_string(),
            email: "maria@example.com".to_string(),
            hashed_password: "argon2-hash".to_string(),
            is_active: true,
            is_superuser: true,
            is_verified: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn user_request_round_trips() {
        let request = UserRequest { id: 42 };
        let raw = serde_json::to_string(&request).unwrap();
        let decoded: UserRequest = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn user_response_round_trips() {
        let response = UserResponse {
            id: 42,
            username: "maria".to_string(),
            email: "maria@example.com".to_string(),
            is_superuser: true,
        };
        let raw = serde_json::to_string(&response).unwrap();
        let decoded: UserResponse = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let request: UserRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.id, 0);

        let response: UserResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.id, 0);
        assert_eq!(response.username, "");
        assert_eq!(response.email, "");
        assert!(!response.is_superuser);
    }

    #[test]
    fn default_constructed_messages_are_zero_valued() {
        assert_eq!(UserRequest::default(), UserRequest { id: 0 });
        assert_eq!(
            UserResponse::default(),
            UserResponse {
                id: 0,
                username: String::new(),
                email: String::new(),
                is_superuser: false,
            }
        );
    }

    #[test]
    fn response_projection_drops_credentials() {
        let response = UserResponse::from(sample_user());
        assert_eq!(response.id, 42);
        assert_eq!(response.username, "maria");
        assert_eq!(response.email, "maria@example.com");
        assert!(response.is_superuser);

        let raw = serde_json::to_value(&response).unwrap();
        assert!(raw.get("hashed_password").is_none());
        assert!(raw.get("is_active").is_none());
    }

    #[test]
    fn field_order_is_stable_on_the_wire() {
        let response = UserResponse::from(sample_user());
        let raw = serde_json::to_string(&response).unwrap();
        let id_pos = raw.find("\"id\"").unwrap();
        let username_pos = raw.find("\"username\"").unwrap();
        let email_pos = raw.find("\"email\"").unwrap();
        let superuser_pos = raw.find("\"is_superuser\"").unwrap();
        assert!(id_pos < username_pos && username_pos < email_pos && email_pos < superuser_pos);
    }
}
