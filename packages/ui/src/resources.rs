//! Data hooks for the list screens.
//!
//! Each list hook issues one request per mount, per filter change and per
//! [`CollectionHandle::refresh`]. Requests are numbered by a [`RequestGeneration`];
//! a response whose ticket is no longer current is dropped, so a slow response for
//! an old filter never overwrites a newer one.

use api::{delete_then_refresh, messages, ApiError, Client, Project, Record};
use dioxus::prelude::*;
use store::{Collection, RequestGeneration};

use crate::session::{use_session, SessionService};

pub struct CollectionHandle<T: 'static> {
    pub state: Signal<Collection<T>>,
    tick: Signal<u64>,
}

impl<T> Clone for CollectionHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CollectionHandle<T> {}

impl<T> CollectionHandle<T> {
    /// Re-fetch the collection. Items stay visible until the new response settles.
    pub fn refresh(&self) {
        let mut tick = self.tick;
        *tick.write() += 1;
    }
}

fn report(what: &str, fallback: &str) -> impl FnOnce(ApiError) -> String {
    let what = what.to_string();
    let fallback = fallback.to_string();
    move |e| {
        tracing::warn!("failed to fetch {what}: {e}");
        e.user_message(&fallback)
    }
}

pub fn use_clients() -> CollectionHandle<Client> {
    let session = use_session();
    let mut state = use_signal(Collection::<Client>::loading);
    let tick = use_signal(|| 0u64);
    let mut generation = use_signal(RequestGeneration::default);

    let _ = use_resource(move || async move {
        let _ = tick();
        let ticket = generation.write().next();
        state.write().reload();

        let result = session.api().list_clients().await;
        if !generation.peek().is_current(ticket) {
            return;
        }
        state
            .write()
            .settle(result, report("clients", messages::FETCH_CLIENTS_FAILED));
    });

    CollectionHandle { state, tick }
}

/// All projects, or only those of `client_id`.
pub fn use_projects(client_id: Option<String>) -> CollectionHandle<Project> {
    let session = use_session();
    let mut state = use_signal(Collection::<Project>::loading);
    let tick = use_signal(|| 0u64);
    let mut generation = use_signal(RequestGeneration::default);

    let _ = use_resource(use_reactive((&client_id,), move |(client_id,)| async move {
        let _ = tick();
        let ticket = generation.write().next();
        state.write().reload();

        let result = session.api().list_projects(client_id.as_deref()).await;
        if !generation.peek().is_current(ticket) {
            tracing::debug!("dropping stale projects response");
            return;
        }
        state
            .write()
            .settle(result, report("projects", messages::FETCH_PROJECTS_FAILED));
    }));

    CollectionHandle { state, tick }
}

/// Delete handle for one kind of record. A successful delete refreshes the list it
/// is run against.
#[derive(Clone, Copy)]
pub struct Deletion {
    record: Record,
    pub loading: Signal<bool>,
    /// Empty when the last delete succeeded.
    pub error: Signal<String>,
    session: SessionService,
}

impl Deletion {
    /// Returns whether the server accepted the delete.
    pub async fn run<T: 'static>(self, id: String, list: CollectionHandle<T>) -> bool {
        let mut loading = self.loading;
        let mut error = self.error;
        loading.set(true);
        error.set(String::new());

        let api = self.session.api();
        let result = delete_then_refresh(&api, self.record, &id, || list.refresh()).await;
        loading.set(false);
        match result {
            Ok(()) => true,
            Err(message) => {
                error.set(message);
                false
            }
        }
    }
}

fn use_deletion(record: Record) -> Deletion {
    Deletion {
        record,
        loading: use_signal(|| false),
        error: use_signal(String::new),
        session: use_session(),
    }
}

pub fn use_delete_client() -> Deletion {
    use_deletion(Record::Client)
}

pub fn use_delete_project() -> Deletion {
    use_deletion(Record::Project)
}
