//! # REST client for the dashboard API
//!
//! [`ApiClient`] wraps a [`Transport`] and an optional bearer token. Every method is
//! a single request:
//!
//! | Method | Request |
//! |--------|---------|
//! | [`login`](ApiClient::login) | `POST /auth/login` |
//! | [`register`](ApiClient::register) | `POST /auth/register` |
//! | [`list_clients`](ApiClient::list_clients) | `GET /clients` |
//! | [`get_client`](ApiClient::get_client) | `GET /clients/:id` |
//! | [`create_client`](ApiClient::create_client) | `POST /clients` |
//! | [`update_client`](ApiClient::update_client) | `PUT /clients/:id` |
//! | [`delete_client`](ApiClient::delete_client) | `DELETE /clients/:id` |
//! | [`list_projects`](ApiClient::list_projects) | `GET /projects` or `GET /projects/client/:clientId` |
//! | [`get_project`](ApiClient::get_project) | `GET /projects/:id` |
//! | [`create_project`](ApiClient::create_project) | `POST /projects` |
//! | [`update_project`](ApiClient::update_project) | `PUT /projects/:id` |
//! | [`delete_project`](ApiClient::delete_project) | `DELETE /projects/:id` |
//!
//! The auth endpoints are public. All others require a token and fail with
//! [`ApiError::MissingToken`] without touching the network when there is none.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{Client, ClientInput, Project, ProjectInput, Role, User};

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug)]
pub struct ApiClient<T: Transport> {
    transport: T,
    token: Option<String>,
}

impl<T: Transport + Clone> ApiClient<T> {
    /// A copy of this client that authenticates with `token`.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            transport: self.transport.clone(),
            token,
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            token: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn authorized(&self, method: Method, path: impl Into<String>) -> Result<ApiRequest, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        Ok(ApiRequest::new(method, path).bearer(token))
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(response.status, &response.body))
        }
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.send(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::new(Method::Post, "/auth/login").json(Self::body(credentials)?);
        self.fetch(request).await
    }

    pub async fn register(&self, form: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::new(Method::Post, "/auth/register").json(Self::body(form)?);
        self.fetch(request).await
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.fetch(self.authorized(Method::Get, "/clients")?).await
    }

    pub async fn get_client(&self, id: &str) -> Result<Client, ApiError> {
        self.fetch(self.authorized(Method::Get, format!("/clients/{id}"))?)
            .await
    }

    pub async fn create_client(&self, input: &ClientInput) -> Result<(), ApiError> {
        let request = self
            .authorized(Method::Post, "/clients")?
            .json(Self::body(input)?);
        self.send(request).await.map(drop)
    }

    pub async fn update_client(&self, id: &str, input: &ClientInput) -> Result<(), ApiError> {
        let request = self
            .authorized(Method::Put, format!("/clients/{id}"))?
            .json(Self::body(input)?);
        self.send(request).await.map(drop)
    }

    pub async fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.authorized(Method::Delete, format!("/clients/{id}"))?)
            .await
            .map(drop)
    }

    /// All projects, or only those of `client_id` when given.
    pub async fn list_projects(&self, client_id: Option<&str>) -> Result<Vec<Project>, ApiError> {
        let path = match client_id {
            Some(id) => format!("/projects/client/{id}"),
            None => "/projects".to_string(),
        };
        self.fetch(self.authorized(Method::Get, path)?).await
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        self.fetch(self.authorized(Method::Get, format!("/projects/{id}"))?)
            .await
    }

    pub async fn create_project(&self, input: &ProjectInput) -> Result<(), ApiError> {
        let request = self
            .authorized(Method::Post, "/projects")?
            .json(Self::body(input)?);
        self.send(request).await.map(drop)
    }

    pub async fn update_project(&self, id: &str, input: &ProjectInput) -> Result<(), ApiError> {
        let request = self
            .authorized(Method::Put, format!("/projects/{id}"))?
            .json(Self::body(input)?);
        self.send(request).await.map(drop)
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.authorized(Method::Delete, format!("/projects/{id}"))?)
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTransport;
    use crate::messages;
    use serde_json::json;
    use store::{Collection, ListState, PendingDelete};

    fn signed_in(transport: &MemoryTransport) -> ApiClient<MemoryTransport> {
        ApiClient::new(transport.clone()).with_token(Some("tok123".into()))
    }

    fn acme() -> serde_json::Value {
        json!({
            "_id": "c1",
            "name": "Acme",
            "email": "acme@x.com",
            "createdAt": "2025-03-04T10:00:00.000Z"
        })
    }

    #[tokio::test]
    async fn test_authenticated_requests_carry_bearer_token() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/clients", 200, json!([acme()]));

        let clients = signed_in(&transport).list_clients().await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Acme");

        let sent = transport.requests();
        assert_eq!(sent[0].authorization().as_deref(), Some("Bearer tok123"));
    }

    #[tokio::test]
    async fn test_missing_token_never_hits_the_network() {
        let transport = MemoryTransport::new();
        let client = ApiClient::new(transport.clone());

        assert_eq!(client.list_projects(None).await, Err(ApiError::MissingToken));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_login_is_public() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Post,
            "/auth/login",
            200,
            json!({"user": {"_id": "u1", "role": "admin"}, "token": "tok123"}),
        );

        let credentials = LoginRequest {
            email: "a@x.com".into(),
            password: "secret1".into(),
        };
        let auth = ApiClient::new(transport.clone()).login(&credentials).await.unwrap();
        assert_eq!(auth.token, "tok123");
        assert_eq!(auth.user.role, Role::Admin);

        let sent = &transport.requests()[0];
        assert!(sent.bearer.is_none());
        assert_eq!(sent.body.as_ref().unwrap()["email"], "a@x.com");
    }

    #[tokio::test]
    async fn test_projects_filtered_by_client_empty() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/projects/client/c1", 200, json!([]));

        let mut projects = Collection::loading();
        let result = signed_in(&transport).list_projects(Some("c1")).await;
        projects.settle(result, |e| e.user_message(messages::FETCH_PROJECTS_FAILED));

        assert_eq!(transport.request_lines(), vec!["GET /projects/client/c1"]);
        assert_eq!(
            ListState::of(&projects, messages::NO_PROJECTS),
            ListState::Empty("No projects found.".into())
        );
        assert!(projects.error.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_with_no_prior_data() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/clients", 500, json!({}));

        let mut clients: Collection<Client> = Collection::loading();
        let result = signed_in(&transport).list_clients().await;
        clients.settle(result, |e| e.user_message(messages::FETCH_CLIENTS_FAILED));

        assert!(clients.items.is_empty());
        assert_eq!(clients.error, "Failed to fetch clients");
    }

    #[tokio::test]
    async fn test_cancelled_delete_sends_nothing() {
        let transport = MemoryTransport::new();
        let mut pending = PendingDelete::default();
        pending.request("p1");
        pending.cancel();

        if let Some(id) = pending.confirm() {
            signed_in(&transport).delete_project(&id).await.unwrap();
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_project_sends_put_with_body() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Put, "/projects/p1", 200, json!({}));

        let input = ProjectInput::new("Site", "Landing page", "c1");
        signed_in(&transport).update_project("p1", &input).await.unwrap();

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.body.as_ref().unwrap()["client"], "c1");
    }

    #[tokio::test]
    async fn test_decode_error_on_malformed_body() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/clients/c1", 200, json!({"unexpected": true}));

        let err = signed_in(&transport).get_client("c1").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
