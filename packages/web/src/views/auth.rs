use dioxus::prelude::*;
use ui::views::{LoginView, SignupView};

#[component]
pub fn Login() -> Element {
    rsx! { LoginView {} }
}

#[component]
pub fn Signup() -> Element {
    rsx! { SignupView {} }
}

/// Unknown paths go to the login screen, which forwards signed-in users on.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));
    nav.replace(ui::paths::LOGIN);
    rsx! {}
}
