use api::{format_date, messages, Client};
use dioxus::prelude::*;
use store::{Capabilities, ListState, PendingDelete};

use crate::icons::{FaFolderOpen, FaPenToSquare, FaTrash};
use crate::resources::{use_clients, use_delete_client};
use crate::session::use_session;
use crate::toast::use_toast;
use crate::views::{ConfirmDialog, SkeletonGrid};
use crate::{paths, Icon};

#[component]
pub fn ClientsView() -> Element {
    let session = use_session();
    let caps = session.capabilities();
    let clients = use_clients();
    let delete = use_delete_client();
    let toast = use_toast();
    let mut pending = use_signal(PendingDelete::default);

    let confirm_delete = move |_| {
        let Some(id) = pending.write().confirm() else {
            return;
        };
        spawn(async move {
            if delete.run(id, clients).await {
                toast.success(messages::CLIENT_DELETED);
            } else {
                toast.error(delete.error.cloned());
            }
            pending.write().finish();
        });
    };

    let list = ListState::of(&*clients.state.read(), messages::NO_CLIENTS);

    rsx! {
        div {
            h1 { class: "view-title", "Clients" }
            {match list {
                ListState::Loading => rsx! { SkeletonGrid {} },
                ListState::Error(message) => rsx! { p { class: "text-error", "{message}" } },
                ListState::Empty(text) => rsx! { p { class: "text-muted", "{text}" } },
                ListState::Populated => rsx! {
                    div {
                        class: "card-grid",
                        for client in clients.state.read().items.iter().cloned() {
                            ClientCard {
                                key: "{client.id}",
                                client,
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
                title: "Delete Client",
                message: "Are you sure you want to delete this client?",
                busy: (delete.loading)(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending.write().cancel(),
            }
        }
    }
}

#[component]
fn ClientCard(client: Client, caps: Capabilities, on_delete: EventHandler<String>) -> Element {
    let avatar = format!(
        "https://ui-avatars.com/api/?name={}",
        client.name.replace(' ', "+")
    );
    let id = client.id.clone();
    let created = format_date(&client.created_at);

    rsx! {
        div {
            class: "card",
            div {
                class: "card-head",
                img { class: "avatar", src: "{avatar}", alt: "" }
                div {
                    h2 { class: "card-title", "{client.name}" }
                    p { class: "text-muted", "{client.email}" }
                }
            }
            if let Some(company) = client.company.as_ref().filter(|c| !c.is_empty()) {
                p { class: "card-line", "Company: " strong { "{company}" } }
            }
            if let Some(phone) = client.phone.as_ref().filter(|p| !p.is_empty()) {
                p { class: "card-line", "Phone: " strong { "{phone}" } }
            }
            p { class: "card-caption", "Created on: {created}" }

            div {
                class: "card-actions",
                if caps.can_delete() {
                    button {
                        class: "link-danger",
                        r#type: "button",
                        title: "Delete Client",
                        onclick: move |_| on_delete.call(id.clone()),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                        " Delete"
                    }
                }
                Link {
                    class: "link-accent",
                    to: paths::client_projects(&client.id),
                    Icon { icon: FaFolderOpen, width: 14, height: 14 }
                    " Projects"
                }
                Link {
                    class: "link-accent",
                    to: paths::edit_client(&client.id),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    if caps.can_edit() { " View/Edit" } else { " View" }
                }
            }
        }
    }
}
