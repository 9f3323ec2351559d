//! This crate contains all shared UI for the workspace: the session context, data
//! hooks, route guards and the dashboard screens. Platform crates only declare the
//! router and mount these views.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod guard;
pub mod logging;
pub mod paths;
pub mod resources;
pub mod views;

mod session;
pub use session::{use_session, PlatformStorage, SessionProvider, SessionService};

mod toast;
pub use toast::{use_toast, ToastKind, ToastProvider, Toaster, TOAST_DURATION};

pub use guard::{decide, decide_public, GuardDecision, RedirectIfSignedIn, RequireSession};
pub use resources::{
    use_clients, use_delete_client, use_delete_project, use_projects, CollectionHandle, Deletion,
};

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");
