use api::{messages, ClientInput};
use dioxus::prelude::*;

use crate::paths;
use crate::session::use_session;

/// Add or edit a client. With `id` the existing record is loaded first; without the
/// edit capability the form is a read-only details screen.
#[component]
pub fn ClientFormView(#[props(default)] id: Option<String>) -> Element {
    let session = use_session();
    let caps = session.capabilities();
    let read_only = caps.is_read_only();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(use_reactive((&id,), move |(id,)| async move {
        let Some(id) = id else {
            return;
        };
        loading.set(true);
        match session.api().get_client(&id).await {
            Ok(client) => {
                let input = ClientInput::from(&client);
                name.set(input.name);
                email.set(input.email);
                phone.set(input.phone);
                company.set(input.company);
            }
            Err(e) => {
                tracing::warn!("failed to load client {id}: {e}");
                error.set(Some(messages::LOAD_CLIENT_FAILED.to_string()));
            }
        }
        loading.set(false);
    }));

    let editing = id.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if read_only {
            return;
        }
        let id = editing.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            let input = ClientInput::from_form(&name(), &email(), &phone(), &company());
            let api = session.api();
            let result = match id.as_deref() {
                Some(id) => api.update_client(id, &input).await,
                None => api.create_client(&input).await,
            };
            loading.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("saved client {}", input.name);
                    navigator().push(paths::CLIENTS);
                }
                Err(e) => {
                    tracing::warn!("failed to save client: {e}");
                    error.set(Some(e.user_message(messages::SAVE_FAILED)));
                }
            }
        });
    };

    let title = match (&id, read_only) {
        (None, _) => "Add Client",
        (Some(_), true) => "Client Details",
        (Some(_), false) => "Edit Client",
    };
    let submit_label = if loading() {
        "Saving..."
    } else if id.is_some() {
        "Update Client"
    } else {
        "Add Client"
    };

    rsx! {
        div {
            class: "form-card",
            h2 { class: "form-title", "{title}" }
            if let Some(message) = error() {
                p { class: "text-error", "{message}" }
            }
            form {
                onsubmit: submit,
                div {
                    class: "form-field",
                    label { r#for: "client-name", "Name" }
                    input {
                        id: "client-name",
                        r#type: "text",
                        required: true,
                        disabled: read_only,
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "client-email", "Email" }
                    input {
                        id: "client-email",
                        r#type: "email",
                        required: true,
                        disabled: read_only,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "client-phone", "Phone" }
                    input {
                        id: "client-phone",
                        r#type: "tel",
                        disabled: read_only,
                        value: "{phone}",
                        oninput: move |evt| phone.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "client-company", "Company" }
                    input {
                        id: "client-company",
                        r#type: "text",
                        disabled: read_only,
                        value: "{company}",
                        oninput: move |evt| company.set(evt.value()),
                    }
                }
                if !read_only {
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
