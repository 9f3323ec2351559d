//! User-facing strings shown when a request fails without a server message, plus
//! the empty-list texts.

pub const FETCH_CLIENTS_FAILED: &str = "Failed to fetch clients";
pub const FETCH_PROJECTS_FAILED: &str = "Failed to fetch projects.";
pub const DELETE_PROJECT_FAILED: &str = "Failed to delete project";
pub const DELETE_CLIENT_FAILED: &str = "Failed to delete client. Please try again.";
pub const LOAD_CLIENT_FAILED: &str = "Failed to load client data.";
pub const LOAD_PROJECT_FAILED: &str = "Failed to load project data.";
pub const SAVE_FAILED: &str = "An error occurred.";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const REGISTER_FAILED: &str = "Registration failed.";

pub const NO_CLIENTS: &str = "No clients found.";
pub const NO_PROJECTS: &str = "No projects found.";

pub const PROJECT_CREATED: &str = "Project created successfully.";
pub const PROJECT_UPDATED: &str = "Project updated successfully.";
pub const PROJECT_DELETED: &str = "Project deleted.";
pub const CLIENT_DELETED: &str = "Client deleted.";
pub const ACCOUNT_CREATED: &str = "Account created successfully!";
pub const LOGGED_IN: &str = "Welcome back!";
