use api::{messages, ProjectInput};
use dioxus::prelude::*;

use crate::paths;
use crate::resources::use_clients;
use crate::session::use_session;
use crate::toast::use_toast;

/// Add or edit a project. The client picker is filled from the clients list.
#[component]
pub fn ProjectFormView(#[props(default)] id: Option<String>) -> Element {
    let session = use_session();
    let read_only = session.capabilities().is_read_only();
    let toast = use_toast();
    let clients = use_clients();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut client_id = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(use_reactive((&id,), move |(id,)| async move {
        let Some(id) = id else {
            return;
        };
        loading.set(true);
        match session.api().get_project(&id).await {
            Ok(project) => {
                let input = ProjectInput::from(&project);
                title.set(input.title);
                description.set(input.description);
                client_id.set(input.client_id);
            }
            Err(e) => {
                tracing::warn!("failed to load project {id}: {e}");
                error.set(Some(messages::LOAD_PROJECT_FAILED.to_string()));
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
            let input = ProjectInput::new(&title(), &description(), &client_id());
            let api = session.api();
            let (result, success) = match id.as_deref() {
                Some(id) => (
                    api.update_project(id, &input).await,
                    messages::PROJECT_UPDATED,
                ),
                None => (api.create_project(&input).await, messages::PROJECT_CREATED),
            };
            loading.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("saved project {}", input.title);
                    toast.success(success);
                    navigator().push(paths::PROJECTS);
                }
                Err(e) => {
                    tracing::warn!("failed to save project: {e}");
                    let message = e.user_message(messages::SAVE_FAILED);
                    toast.error(message.clone());
                    error.set(Some(message));
                }
            }
        });
    };

    let heading = match (&id, read_only) {
        (None, _) => "Add Project",
        (Some(_), true) => "Project Details",
        (Some(_), false) => "Edit Project",
    };
    let submit_label = if loading() {
        "Saving..."
    } else if id.is_some() {
        "Update Project"
    } else {
        "Add Project"
    };
    // A failed clients fetch leaves the picker empty.
    let options = clients.state.read().items.clone();

    rsx! {
        div {
            class: "form-card",
            h2 { class: "form-title", "{heading}" }
            if let Some(message) = error() {
                p { class: "text-error", "{message}" }
            }
            form {
                onsubmit: submit,
                div {
                    class: "form-field",
                    label { r#for: "project-title", "Title" }
                    input {
                        id: "project-title",
                        r#type: "text",
                        required: true,
                        disabled: read_only,
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "project-description", "Description" }
                    textarea {
                        id: "project-description",
                        rows: 4,
                        disabled: read_only,
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "project-client", "Client" }
                    select {
                        id: "project-client",
                        required: true,
                        disabled: read_only,
                        value: "{client_id}",
                        onchange: move |evt| client_id.set(evt.value()),
                        option { value: "", "Select Client" }
                        for client in options {
                            option {
                                key: "{client.id}",
                                value: "{client.id}",
                                selected: client.id == client_id(),
                                "{client.name} ({client.email})"
                            }
                        }
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
