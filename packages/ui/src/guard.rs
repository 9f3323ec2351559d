//! Route guards for the dashboard and the public auth screens.
//!
//! The decision is a pure function of the [`Session`] so it can be tested without a
//! renderer; [`RequireSession`] and [`RedirectIfSignedIn`] apply it on every render.

use dioxus::prelude::*;
use store::Session;

use crate::paths;
use crate::session::use_session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Dashboard routes need an authenticated session.
pub fn decide(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(paths::LOGIN)
    }
}

/// Login and signup forward an authenticated session to the dashboard.
pub fn decide_public(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Redirect(paths::DASHBOARD)
    } else {
        GuardDecision::Render
    }
}

/// Renders `children` only for an authenticated session, otherwise sends the user
/// to the login screen.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let session = use_session();
    let state = session.state();

    use_effect(move || {
        let decision = decide(&state.read());
        if let GuardDecision::Redirect(to) = decision {
            navigator().replace(to);
        }
    });

    let decision = decide(&state.read());
    match decision {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Redirect(_) => rsx! {},
    }
}

/// Wraps the login and signup screens.
#[component]
pub fn RedirectIfSignedIn(children: Element) -> Element {
    let session = use_session();
    let state = session.state();

    use_effect(move || {
        let decision = decide_public(&state.read());
        if let GuardDecision::Redirect(to) = decision {
            navigator().replace(to);
        }
    });

    rsx! { {children} }
}
