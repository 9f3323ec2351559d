//! # Domain models for users, clients and projects
//!
//! These mirror the JSON documents served by the dashboard REST API. Field names
//! follow the wire format (`_id`, `createdAt`, `createdBy`) through serde renames so
//! the Rust side can keep snake_case.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The signed-in account. Only `_id` and `role` are guaranteed by the auth endpoints; `name` and `email` default to empty strings. |
//! | [`Client`] | A customer record, owned by the API. |
//! | [`Project`] | A project with a denormalised [`ProjectClient`] reference. |
//! | [`ClientInput`] / [`ProjectInput`] | Bodies sent by the create/edit forms. |

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Account role. Gates UI affordances only; the API enforces permissions itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Parse the value of a role `<select>`; anything unknown is a standard user.
    pub fn from_form(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Name if set, otherwise the email address.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Client fields embedded in a project document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectClient {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(default)]
    pub client: Option<ProjectClient>,
    #[serde(rename = "createdBy", default)]
    pub created_by: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl ClientInput {
    /// Build from raw form fields. Blank optional fields are still sent as `""`
    /// so an update clears them on the server.
    pub fn from_form(name: &str, email: &str, phone: &str, company: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            company: company.trim().to_string(),
        }
    }
}

impl From<&Client> for ClientInput {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone().unwrap_or_default(),
            company: client.company.clone().unwrap_or_default(),
        }
    }
}

/// Project form body. The API reads the owning client from `client`; `clientId`
/// is sent alongside it for older handlers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub client: String,
}

impl ProjectInput {
    pub fn new(title: &str, description: &str, client_id: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description.to_string(),
            client_id: client_id.to_string(),
            client: client_id.to_string(),
        }
    }
}

impl From<&Project> for ProjectInput {
    fn from(project: &Project) -> Self {
        let client_id = project
            .client
            .as_ref()
            .map(|c| c.id.clone())
            .unwrap_or_default();
        Self {
            title: project.title.clone(),
            description: project.description.clone().unwrap_or_default(),
            client: client_id.clone(),
            client_id,
        }
    }
}

/// Render a `createdAt` timestamp as `Mar 4, 2025`. Unparsable input is returned as-is.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_minimal_login_payload() {
        let user: User = serde_json::from_str(r#"{"_id":"u1","role":"admin"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Admin);
        assert!(user.name.is_empty());
        assert_eq!(user.display_name(), "");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            id: "u2".into(),
            name: String::new(),
            email: "b@x.com".into(),
            role: Role::User,
        };
        assert_eq!(user.display_name(), "b@x.com");
    }

    #[test]
    fn test_project_wire_shape() {
        let json = r#"{
            "_id": "p1",
            "title": "Website",
            "createdAt": "2025-03-04T10:00:00.000Z",
            "client": {"_id": "c1", "name": "Acme", "email": "acme@x.com"},
            "createdBy": "u1"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.client.as_ref().unwrap().name, "Acme");
        assert!(project.description.is_none());
        assert_eq!(project.created_by, "u1");
    }

    #[test]
    fn test_project_input_sends_both_client_keys() {
        let body = serde_json::to_value(ProjectInput::new(" Site ", "", "c1")).unwrap();
        assert_eq!(body["title"], "Site");
        assert_eq!(body["clientId"], "c1");
        assert_eq!(body["client"], "c1");
    }

    #[test]
    fn test_cleared_client_fields_are_still_sent() {
        let existing = Client {
            id: "c1".into(),
            name: "Acme".into(),
            email: "acme@x.com".into(),
            phone: Some("555-1234".into()),
            company: Some("Acme Ltd".into()),
            created_at: String::new(),
        };
        let prefilled = ClientInput::from(&existing);
        assert_eq!(prefilled.phone, "555-1234");

        let input = ClientInput::from_form("Acme", "acme@x.com", "  ", "Acme Ltd");
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["phone"], "");
        assert_eq!(body["company"], "Acme Ltd");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-04T10:00:00.000Z"), "Mar 4, 2025");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
