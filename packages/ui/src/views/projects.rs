use api::{format_date, messages, Project};
use dioxus::prelude::*;
use store::{Capabilities, ListState, PendingDelete};

use crate::icons::{FaEye, FaFolder, FaPenToSquare, FaTrash};
use crate::resources::{use_delete_project, use_projects};
use crate::session::use_session;
use crate::toast::use_toast;
use crate::views::{ConfirmDialog, SkeletonGrid};
use crate::{paths, Icon};

/// Project grid, optionally limited to one client's projects.
#[component]
pub fn ProjectsView(#[props(default)] client_id: Option<String>) -> Element {
    let session = use_session();
    let caps = session.capabilities();
    let title = if client_id.is_some() {
        "Projects by Client"
    } else {
        "All Projects"
    };

    let projects = use_projects(client_id);
    let delete = use_delete_project();
    let toast = use_toast();
    let mut pending = use_signal(PendingDelete::default);

    let confirm_delete = move |_| {
        let Some(id) = pending.write().confirm() else {
            return;
        };
        spawn(async move {
            if delete.run(id, projects).await {
                toast.success(messages::PROJECT_DELETED);
            } else {
                toast.error(delete.error.cloned());
            }
            pending.write().finish();
        });
    };

    let list = ListState::of(&*projects.state.read(), messages::NO_PROJECTS);

    rsx! {
        div {
            h1 { class: "view-title", "{title}" }
            if !delete.error.read().is_empty() {
                p { class: "text-error", "{delete.error}" }
            }
            {match list {
                ListState::Loading => rsx! { SkeletonGrid {} },
                ListState::Error(message) => rsx! { p { class: "text-error", "{message}" } },
                ListState::Empty(text) => rsx! { p { class: "text-muted", "{text}" } },
                ListState::Populated => rsx! {
                    div {
                        class: "card-grid",
                        for project in projects.state.read().items.iter().cloned() {
                            ProjectCard {
                                key: "{project.id}",
                                project,
                                caps,
                                on_delete: move |id: String| pending.write().request(id),
                            }
                        }
                    }
                },
            }}
        }

        if pending.read().is_open() {
            ConfirmDialog {
                title: "Delete Project",
                message: "Are you sure you want to delete this project?",
                busy: (delete.loading)(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending.write().cancel(),
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, caps: Capabilities, on_delete: EventHandler<String>) -> Element {
    let id = project.id.clone();
    let description = project
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "No description".to_string());
    let (client_name, client_email) = match &project.client {
        Some(client) => (client.name.clone(), client.email.clone()),
        None => ("N/A".to_string(), "N/A".to_string()),
    };
    let created = format_date(&project.created_at);

    rsx! {
        div {
            class: "card",
            span { class: "card-badge", Icon { icon: FaFolder, width: 16, height: 16 } }
            h2 { class: "card-title", "{project.title}" }
            p { class: "text-muted", "{description}" }
            p {
                class: "card-line",
                "Client: "
                strong { "{client_name}" }
                br {}
                small { "{client_email}" }
            }
            p { class: "card-caption", "Created: {created}" }

            div {
                class: "card-actions",
                if caps.can_edit() {
                    Link {
                        class: "link-accent",
                        to: paths::edit_project(&project.id),
                        Icon { icon: FaPenToSquare, width: 16, height: 16 }
                    }
                }
                if caps.can_delete() {
                    button {
                        class: "link-danger",
                        r#type: "button",
                        title: "Delete Project",
                        onclick: move |_| on_delete.call(id.clone()),
                        Icon { icon: FaTrash, width: 16, height: 16 }
                    }
                }
                Link {
                    class: "link-muted",
                    to: paths::edit_project(&project.id),
                    Icon { icon: FaEye, width: 16, height: 16 }
                }
            }
        }
    }
}
