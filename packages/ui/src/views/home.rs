use dioxus::prelude::*;

use crate::icons::{FaCircleArrowRight, FaClipboardList, FaUsers};
use crate::session::use_session;
use crate::views::Skeleton;
use crate::{paths, Icon};

/// Dashboard landing page: greeting, totals and quick links.
#[component]
pub fn HomeView() -> Element {
    let session = use_session();
    let caps = session.capabilities();
    let name = session
        .state()
        .read()
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    // Both counts are fetched together; a failure leaves that total at zero.
    let totals = use_resource(move || async move {
        let client = session.api();
        let (clients, projects) =
            futures::join!(client.list_clients(), client.list_projects(None));
        let count = |what: &str, result: Result<usize, api::ApiError>| {
            result.unwrap_or_else(|e| {
                tracing::warn!("failed to count {what}: {e}");
                0
            })
        };
        (
            count("clients", clients.map(|c| c.len())),
            count("projects", projects.map(|p| p.len())),
        )
    });
    let totals = totals.read().as_ref().copied();

    rsx! {
        div {
            class: "home",
            h1 {
                class: "view-title",
                if name.is_empty() { "Welcome Back" } else { "Welcome Back, {name}" }
            }
            p { class: "view-subtitle", "Here's a quick overview of your dashboard." }

            div {
                class: "stat-grid",
                StatCard {
                    title: "Total Clients",
                    value: totals.map(|(clients, _)| clients),
                    icon: rsx! { Icon { icon: FaUsers, width: 22, height: 22 } },
                }
                StatCard {
                    title: "Active Projects",
                    value: totals.map(|(_, projects)| projects),
                    icon: rsx! { Icon { icon: FaClipboardList, width: 22, height: 22 } },
                }
            }

            div {
                class: "quick-links",
                h3 { "Quick Links" }
                ul {
                    li {
                        Link { to: paths::CLIENTS,
                            Icon { icon: FaCircleArrowRight, width: 14, height: 14 }
                            " View All Clients"
                        }
                    }
                    li {
                        Link { to: paths::PROJECTS,
                            Icon { icon: FaCircleArrowRight, width: 14, height: 14 }
                            " View All Projects"
                        }
                    }
                    if caps.can_create() {
                        li {
                            Link { to: paths::ADD_CLIENT,
                                Icon { icon: FaCircleArrowRight, width: 14, height: 14 }
                                " Add New Client"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: String, value: Option<usize>, icon: Element) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-icon", {icon} }
            div {
                h2 { class: "stat-title", "{title}" }
                if let Some(value) = value {
                    p { class: "stat-value", "{value}" }
                } else {
                    Skeleton { class: "skeleton-stat" }
                }
            }
        }
    }
}
