use dioxus::prelude::*;

use ui::{SessionProvider, ToastProvider};
use views::{
    AddClient, AddProject, ClientProjects, Clients, DashboardLayout, EditClient, EditProject,
    Home, Login, NotFound, Projects, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[nest("/dashboard")]
        #[layout(DashboardLayout)]
            #[route("/")]
            Home {},
            #[route("/clients")]
            Clients {},
            #[route("/clients/edit/:id")]
            EditClient { id: String },
            #[route("/clients/:client_id/projects")]
            ClientProjects { client_id: String },
            #[route("/projects")]
            Projects {},
            #[route("/projects/edit/:id")]
            EditProject { id: String },
            #[route("/add-client")]
            AddClient {},
            #[route("/add-project")]
            AddProject {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    ui::logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::DASHBOARD_CSS }
        Shell {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::str::FromStr;

    use dioxus::core::NoOpMutations;
    use dioxus::history::{History, MemoryHistory};
    use dioxus::router::components::HistoryProvider;

    use super::*;

    const PROTECTED: &[&str] = &[
        "/dashboard",
        "/dashboard/clients",
        "/dashboard/clients/edit/c1",
        "/dashboard/clients/c1/projects",
        "/dashboard/projects",
        "/dashboard/projects/edit/p1",
        "/dashboard/add-client",
        "/dashboard/add-project",
    ];

    fn routed(history: Rc<MemoryHistory>) -> Element {
        rsx! {
            HistoryProvider {
                history: move |_| history.clone() as Rc<dyn History>,
                Shell {}
            }
        }
    }

    /// Mounts the app at `path` with a fresh (signed-out) session and returns
    /// where the router ends up once effects have run.
    fn landing(path: &str) -> String {
        let history = Rc::new(MemoryHistory::with_initial_path(path));
        let mut dom = VirtualDom::new_with_props(routed, history.clone());
        dom.rebuild_in_place();
        for _ in 0..4 {
            dom.render_immediate(&mut NoOpMutations);
        }
        history.current_route()
    }

    #[test]
    fn test_protected_routes_redirect_anonymous_to_login() {
        for path in PROTECTED {
            assert_eq!(landing(path), ui::paths::LOGIN, "{path} rendered without a session");
        }
    }

    #[test]
    fn test_public_routes_render_without_session() {
        assert_eq!(landing(ui::paths::LOGIN), ui::paths::LOGIN);
        assert_eq!(landing(ui::paths::SIGNUP), ui::paths::SIGNUP);
    }

    #[test]
    fn test_unknown_route_goes_to_login() {
        assert!(matches!(
            Route::from_str("/nowhere/at/all").ok(),
            Some(Route::NotFound { .. })
        ));
        assert_eq!(landing("/nowhere/at/all"), ui::paths::LOGIN);
    }

    #[test]
    fn test_route_parameters() {
        assert_eq!(
            Route::from_str("/dashboard/clients/c1/projects").ok(),
            Some(Route::ClientProjects {
                client_id: "c1".into()
            })
        );
        assert_eq!(
            Route::from_str("/dashboard/projects/edit/p1").ok(),
            Some(Route::EditProject { id: "p1".into() })
        );
    }

    #[test]
    fn test_shared_paths_match_router() {
        for path in [
            ui::paths::LOGIN,
            ui::paths::SIGNUP,
            ui::paths::DASHBOARD,
            ui::paths::CLIENTS,
            ui::paths::PROJECTS,
            ui::paths::ADD_CLIENT,
            ui::paths::ADD_PROJECT,
        ] {
            let route = Route::from_str(path).ok();
            assert!(
                !matches!(route, None | Some(Route::NotFound { .. })),
                "{path} has no route"
            );
        }
    }
}
