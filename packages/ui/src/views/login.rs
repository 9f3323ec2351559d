use api::{messages, LoginRequest};
use dioxus::prelude::*;
use store::SessionPhase;

use crate::guard::RedirectIfSignedIn;
use crate::paths;
use crate::session::use_session;
use crate::toast::use_toast;

/// Email and password sign-in. Errors show inline and as a toast; success lands
/// on the dashboard.
#[component]
pub fn LoginView() -> Element {
    let session = use_session();
    let state = session.state();
    let toast = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        spawn(async move {
            if session.login(credentials).await {
                toast.success(messages::LOGGED_IN);
                navigator().replace(paths::DASHBOARD);
            } else {
                toast.error(state.read().error_message().to_string());
            }
        });
    };

    let busy = state.read().phase() == SessionPhase::Authenticating;
    let error = state.read().error_message().to_string();

    rsx! {
        RedirectIfSignedIn {
            div {
                class: "auth-page",
                div {
                    class: "auth-card",
                    h2 { class: "auth-title", "Login" }
                    form {
                        onsubmit: submit,
                        div {
                            class: "form-field",
                            label { r#for: "login-email", "Email" }
                            input {
                                id: "login-email",
                                r#type: "email",
                                required: true,
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "login-password", "Password" }
                            input {
                                id: "login-password",
                                r#type: "password",
                                required: true,
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }
                        if !error.is_empty() {
                            p { class: "text-error text-center", "{error}" }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "submit",
                            disabled: busy,
                            if busy { "Logging in..." } else { "Login" }
                        }
                        p {
                            class: "auth-switch",
                            "Don't have an account? "
                            Link { to: paths::SIGNUP, "Sign Up" }
                        }
                    }
                }
            }
        }
    }
}
