use api::{messages, RegisterRequest, Role};
use dioxus::prelude::*;
use store::SessionPhase;

use crate::guard::RedirectIfSignedIn;
use crate::paths;
use crate::session::use_session;
use crate::toast::use_toast;

/// Account registration. A successful sign-up is also a sign-in.
#[component]
pub fn SignupView() -> Element {
    let session = use_session();
    let state = session.state();
    let toast = use_toast();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = RegisterRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            role: Role::from_form(&role()),
        };
        spawn(async move {
            if session.register(form).await {
                toast.success(messages::ACCOUNT_CREATED);
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
                form {
                    class: "auth-card",
                    onsubmit: submit,
                    h2 { class: "auth-title", "Sign Up" }
                    input {
                        r#type: "text",
                        placeholder: "Name",
                        required: true,
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password - must be at least 6 characters",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    select {
                        required: true,
                        value: "{role}",
                        onchange: move |evt| role.set(evt.value()),
                        option { value: "", disabled: true, "Select Role" }
                        option { value: Role::Admin.as_str(), "Admin" }
                        option { value: Role::User.as_str(), "User" }
                    }
                    if !error.is_empty() {
                        p { class: "text-error", "{error}" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy,
                        if busy { "Signing up..." } else { "Sign Up" }
                    }
                    p {
                        class: "auth-switch",
                        "Already have an account? "
                        Link { to: paths::LOGIN, "Login" }
                    }
                }
            }
        }
    }
}
