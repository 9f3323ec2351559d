//! Confirmed deletes.
//!
//! A delete that the server accepts is followed by exactly one refresh of the list
//! it came from; a rejected delete leaves that list alone and yields the text to
//! show the user.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::messages;
use crate::transport::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    Client,
    Project,
}

impl Record {
    pub fn as_str(&self) -> &'static str {
        match self {
            Record::Client => "client",
            Record::Project => "project",
        }
    }

    /// Client deletes always show the fixed retry text; project deletes prefer the
    /// server's message.
    pub fn failure_message(&self, err: &ApiError) -> String {
        match self {
            Record::Client => messages::DELETE_CLIENT_FAILED.to_string(),
            Record::Project => err.user_message(messages::DELETE_PROJECT_FAILED),
        }
    }
}

/// Delete `id` and, once the server accepts, call `refresh` for the owning list.
pub async fn delete_then_refresh<T: Transport>(
    api: &ApiClient<T>,
    record: Record,
    id: &str,
    refresh: impl FnOnce(),
) -> Result<(), String> {
    let result = match record {
        Record::Client => api.delete_client(id).await,
        Record::Project => api.delete_project(id).await,
    };
    match result {
        Ok(()) => {
            tracing::info!("deleted {} {id}", record.as_str());
            refresh();
            Ok(())
        }
        Err(e) => {
            tracing::warn!("failed to delete {} {id}: {e}", record.as_str());
            Err(record.failure_message(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::memory::MemoryTransport;
    use crate::transport::Method;
    use serde_json::json;
    use store::{Client, Collection};

    fn signed_in(transport: &MemoryTransport) -> ApiClient<MemoryTransport> {
        ApiClient::new(transport.clone()).with_token(Some("tok123".into()))
    }

    #[tokio::test]
    async fn test_forbidden_client_delete_keeps_list() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/clients",
            200,
            json!([{"_id": "c1", "name": "Acme", "email": "acme@x.com"}]),
        );
        transport.respond(Method::Delete, "/clients/c1", 403, json!({"message": "Forbidden"}));
        let api = signed_in(&transport);

        let mut clients: Collection<Client> = Collection::loading();
        clients.settle(api.list_clients().await, |e| e.to_string());

        let result = delete_then_refresh(&api, Record::Client, "c1", || clients.reload()).await;

        assert_eq!(
            result,
            Err("Failed to delete client. Please try again.".to_string())
        );
        assert!(!clients.loading);
        assert_eq!(clients.len(), 1);
        assert_eq!(clients.items[0].id, "c1");
        assert_eq!(transport.request_lines(), vec!["GET /clients", "DELETE /clients/c1"]);
    }

    #[tokio::test]
    async fn test_project_delete_refreshes_once() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Delete, "/projects/p1", 200, json!({"message": "deleted"}));
        let refreshes = Cell::new(0);

        let result = delete_then_refresh(&signed_in(&transport), Record::Project, "p1", || {
            refreshes.set(refreshes.get() + 1)
        })
        .await;

        assert_eq!(result, Ok(()));
        assert_eq!(refreshes.get(), 1);
        assert_eq!(transport.request_lines(), vec!["DELETE /projects/p1"]);
    }

    #[tokio::test]
    async fn test_project_delete_failure_uses_server_message() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Delete, "/projects/p1", 404, json!({"message": "Project not found"}));
        let refreshes = Cell::new(0);

        let result = delete_then_refresh(&signed_in(&transport), Record::Project, "p1", || {
            refreshes.set(refreshes.get() + 1)
        })
        .await;

        assert_eq!(result, Err("Project not found".to_string()));
        assert_eq!(refreshes.get(), 0);
    }

    #[tokio::test]
    async fn test_project_delete_failure_without_message_falls_back() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Delete, "/projects/p1", 500, json!(null));

        let result = delete_then_refresh(&signed_in(&transport), Record::Project, "p1", || {}).await;

        assert_eq!(result, Err(messages::DELETE_PROJECT_FAILED.to_string()));
    }
}
