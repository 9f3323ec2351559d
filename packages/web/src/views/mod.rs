mod auth;
pub use auth::{Login, NotFound, Signup};

mod dashboard;
pub use dashboard::{
    AddClient, AddProject, ClientProjects, Clients, DashboardLayout, EditClient, EditProject,
    Home, Projects,
};
