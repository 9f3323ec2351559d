use dioxus::prelude::*;
use ui::views::{
    ClientFormView, ClientsView, DashboardLayoutView, HomeView, ProjectFormView, ProjectsView,
};

use crate::Route;

#[component]
pub fn DashboardLayout() -> Element {
    rsx! {
        DashboardLayoutView {
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
pub fn Clients() -> Element {
    rsx! { ClientsView {} }
}

#[component]
pub fn AddClient() -> Element {
    rsx! { ClientFormView {} }
}

#[component]
pub fn EditClient(id: String) -> Element {
    rsx! { ClientFormView { id } }
}

#[component]
pub fn ClientProjects(client_id: String) -> Element {
    rsx! { ProjectsView { client_id } }
}

#[component]
pub fn Projects() -> Element {
    rsx! { ProjectsView {} }
}

#[component]
pub fn AddProject() -> Element {
    rsx! { ProjectFormView {} }
}

#[component]
pub fn EditProject(id: String) -> Element {
    rsx! { ProjectFormView { id } }
}
