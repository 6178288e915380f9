//! Wire models exchanged with the user service.

use nwatch_derive::api_model;

/// Body of `POST /api/users`.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct UserPayload {
    /// First and last name joined by a single space.
    pub full_name: String,
    pub email: String,
    pub notification_enabled: bool,
}

impl UserPayload {
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, email: &str, notification_enabled: bool) -> Self {
        Self {
            full_name: format!("{first_name} {last_name}"),
            email: email.to_owned(),
            notification_enabled,
        }
    }
}

/// The user record echoed back by the service on `201 Created`.
///
/// Only used for diagnostics; the service may add fields at any time.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct CreatedUser {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub notification_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_format() {
        let payload = UserPayload::new("Jo", "Li", "jo@example.com", true);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "fullName": "Jo Li", "email": "jo@example.com", "notificationEnabled": true })
        );
    }

    #[test]
    fn test_created_user_tolerates_extra_fields() {
        let body = json!({
            "id": 7,
            "fullName": "Jo Li",
            "email": "jo@example.com",
            "notificationEnabled": false,
            "createdAt": "2026-01-01T00:00:00"
        });
        let user: CreatedUser = serde_json::from_value(body).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.full_name, "Jo Li");
        assert!(!user.notification_enabled);
    }
}
