//! Route paths the shared views navigate to. The router in the platform crate
//! must declare the same paths.

pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const DASHBOARD: &str = "/dashboard";
pub const CLIENTS: &str = "/dashboard/clients";
pub const PROJECTS: &str = "/dashboard/projects";
pub const ADD_CLIENT: &str = "/dashboard/add-client";
pub const ADD_PROJECT: &str = "/dashboard/add-project";

pub fn edit_client(id: &str) -> String {
    format!("{CLIENTS}/edit/{id}")
}

pub fn edit_project(id: &str) -> String {
    format!("{PROJECTS}/edit/{id}")
}

pub fn client_projects(client_id: &str) -> String {
    format!("{CLIENTS}/{client_id}/projects")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterised_paths() {
        assert_eq!(edit_client("c1"), "/dashboard/clients/edit/c1");
        assert_eq!(edit_project("p1"), "/dashboard/projects/edit/p1");
        assert_eq!(client_projects("c1"), "/dashboard/clients/c1/projects");
    }
}
