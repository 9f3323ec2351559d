use dioxus::prelude::*;

use crate::guard::RequireSession;
use crate::icons::{FaBars, FaChevronDown, FaFolder, FaRightFromBracket, FaUsers, FaXmark};
use crate::session::use_session;
use crate::{paths, Icon};

/// Navigation shell around every dashboard screen.
///
/// The platform crate passes its router `Outlet` as `children`. Anonymous sessions
/// never see the shell; they are redirected to the login screen.
#[component]
pub fn DashboardLayoutView(children: Element) -> Element {
    rsx! {
        RequireSession {
            DashboardShell { {children} }
        }
    }
}

#[component]
fn DashboardShell(children: Element) -> Element {
    let session = use_session();
    let caps = session.capabilities();

    let mut sidebar_open = use_signal(|| false);
    let mut clients_open = use_signal(|| false);
    let mut projects_open = use_signal(|| false);

    let logout = move |_| {
        session.logout();
        navigator().replace(paths::LOGIN);
    };

    rsx! {
        div {
            class: "dashboard",

            button {
                class: "sidebar-toggle",
                r#type: "button",
                aria_label: "Toggle navigation",
                onclick: move |_| sidebar_open.toggle(),
                if sidebar_open() {
                    Icon { icon: FaXmark, width: 22, height: 22 }
                } else {
                    Icon { icon: FaBars, width: 22, height: 22 }
                }
            }

            aside {
                class: if sidebar_open() { "sidebar sidebar-open" } else { "sidebar" },

                Link { class: "sidebar-brand", to: paths::DASHBOARD, "Dashboard" }

                nav {
                    class: "sidebar-nav",

                    NavSection {
                        label: "Clients",
                        open: clients_open(),
                        on_toggle: move |_| clients_open.toggle(),
                        icon: rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
                        Link { class: "sidebar-link", to: paths::CLIENTS, "All Clients" }
                        if caps.can_create() {
                            Link { class: "sidebar-link", to: paths::ADD_CLIENT, "Add Client" }
                        }
                    }

                    NavSection {
                        label: "Projects",
                        open: projects_open(),
                        on_toggle: move |_| projects_open.toggle(),
                        icon: rsx! { Icon { icon: FaFolder, width: 16, height: 16 } },
                        Link { class: "sidebar-link", to: paths::PROJECTS, "All Projects" }
                        if caps.can_create() {
                            Link { class: "sidebar-link", to: paths::ADD_PROJECT, "Add Project" }
                        }
                    }
                }

                button {
                    class: "sidebar-logout",
                    r#type: "button",
                    onclick: logout,
                    Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                    "Logout"
                }
            }

            div {
                class: "dashboard-main",
                header {
                    class: "dashboard-header",
                    h1 { "Client & Project Dashboard" }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: logout,
                        "Logout"
                    }
                }
                main {
                    class: "dashboard-content",
                    {children}
                }
            }
        }
    }
}

#[component]
fn NavSection(
    label: String,
    open: bool,
    on_toggle: EventHandler<()>,
    icon: Element,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "nav-section",
            button {
                class: "nav-section-toggle",
                r#type: "button",
                aria_expanded: "{open}",
                onclick: move |_| on_toggle.call(()),
                span {
                    class: "nav-section-label",
                    {icon}
                    "{label}"
                }
                span {
                    class: if open { "chevron chevron-open" } else { "chevron" },
                    Icon { icon: FaChevronDown, width: 12, height: 12 }
                }
            }
            if open {
                div { class: "nav-section-links", {children} }
            }
        }
    }
}
