//! # Collection state for list screens
//!
//! - [`Collection`] is the items / loading / error triple a list hook exposes.
//! - [`RequestGeneration`] hands out [`Ticket`]s; only the newest ticket may write
//!   its response, so when a filter changes mid-flight the older response is dropped.
//! - [`ListState`] is what a grid renders, derived from a collection.
//! - [`PendingDelete`] holds the id awaiting confirmation in the delete dialog.

/// Items plus the loading and error flags of one remote collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// Empty when there is no error.
    pub error: String,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::loading()
    }
}

impl<T> Collection<T> {
    /// State before the first response: nothing loaded, request pending.
    pub fn loading() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: String::new(),
        }
    }

    /// A new request started. Previously loaded items stay visible until it settles.
    pub fn reload(&mut self) {
        self.loading = true;
    }

    pub fn succeed(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error.clear();
    }

    /// Keeps whatever a previous success loaded; never invents items.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = message.into();
    }

    pub fn settle<E>(&mut self, result: Result<Vec<T>, E>, on_error: impl FnOnce(E) -> String) {
        match result {
            Ok(items) => self.succeed(items),
            Err(e) => self.fail(on_error(e)),
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Identifies one request issued by a [`RequestGeneration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request counter; a response is applied only if its ticket is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn next(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

/// What a list grid shows. An error wins over both the empty and populated states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Error(String),
    Empty(String),
    Populated,
}

impl ListState {
    pub fn of<T>(collection: &Collection<T>, empty_text: &str) -> Self {
        if collection.loading {
            ListState::Loading
        } else if collection.has_error() {
            ListState::Error(collection.error.clone())
        } else if collection.is_empty() {
            ListState::Empty(empty_text.to_string())
        } else {
            ListState::Populated
        }
    }
}

/// The record a delete dialog is asking about.
///
/// The dialog stays open from [`confirm`](Self::confirm) until
/// [`finish`](Self::finish) so it can show the request in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingDelete {
    target: Option<String>,
    in_flight: bool,
}

impl PendingDelete {
    pub fn request(&mut self, id: impl Into<String>) {
        if self.in_flight {
            return;
        }
        self.target = Some(id.into());
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Hand back the id to delete. Returns `None` when nothing is selected or the
    /// delete is already running.
    pub fn confirm(&mut self) -> Option<String> {
        if self.in_flight {
            return None;
        }
        let id = self.target.clone()?;
        self.in_flight = true;
        Some(id)
    }

    /// The request settled; close the dialog.
    pub fn finish(&mut self) {
        self.target = None;
        self.in_flight = false;
    }

    /// Dismiss without deleting. Ignored while the delete is running.
    pub fn cancel(&mut self) {
        if !self.in_flight {
            self.target = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_before_any_success_keeps_items_empty() {
        let mut clients: Collection<String> = Collection::loading();
        clients.settle(Err("boom"), |_| "Failed to fetch clients".to_string());

        assert!(!clients.loading);
        assert!(clients.is_empty());
        assert_eq!(clients.error, "Failed to fetch clients");
        assert_eq!(
            ListState::of(&clients, "No clients found."),
            ListState::Error("Failed to fetch clients".into())
        );
    }

    #[test]
    fn test_empty_response_renders_empty_text() {
        let mut projects: Collection<String> = Collection::loading();
        assert_eq!(ListState::of(&projects, "No projects found."), ListState::Loading);

        projects.settle(Ok::<_, ()>(Vec::new()), |_| unreachable!());
        assert_eq!(
            ListState::of(&projects, "No projects found."),
            ListState::Empty("No projects found.".into())
        );
        assert!(!projects.has_error());
    }

    #[test]
    fn test_reload_keeps_items_and_success_clears_error() {
        let mut c: Collection<u32> = Collection::loading();
        c.succeed(vec![1, 2]);
        c.reload();
        assert!(c.loading);
        assert_eq!(c.len(), 2);

        c.fail("later failure");
        assert_eq!(c.items, vec![1, 2]);

        c.succeed(vec![3]);
        assert!(c.error.is_empty());
        assert_eq!(ListState::of(&c, "none"), ListState::Populated);
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut generation = RequestGeneration::default();
        let first = generation.next();
        let second = generation.next();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_pending_delete_confirm_and_cancel() {
        let mut pending = PendingDelete::default();
        assert!(!pending.is_open());

        pending.request("p1");
        assert_eq!(pending.target(), Some("p1"));
        assert_eq!(pending.confirm().as_deref(), Some("p1"));
        assert!(pending.is_open());
        assert!(pending.is_busy());
        assert!(pending.confirm().is_none());
        pending.finish();
        assert!(!pending.is_open());
        assert!(!pending.is_busy());

        pending.request("p2");
        pending.cancel();
        assert!(pending.confirm().is_none());
    }

    #[test]
    fn test_dialog_stays_open_while_delete_runs() {
        let mut pending = PendingDelete::default();
        pending.request("c1");
        let id = pending.confirm();
        assert_eq!(id.as_deref(), Some("c1"));

        pending.cancel();
        pending.request("c2");
        assert_eq!(pending.target(), Some("c1"));
        assert!(pending.is_busy());

        pending.finish();
        pending.request("c2");
        assert_eq!(pending.target(), Some("c2"));
        assert!(!pending.is_busy());
    }
}
