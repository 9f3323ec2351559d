mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod skeleton;
pub use skeleton::{Skeleton, SkeletonGrid};

mod layout;
pub use layout::DashboardLayoutView;

mod home;
pub use home::HomeView;

mod clients;
pub use clients::ClientsView;

mod projects;
pub use projects::ProjectsView;

mod client_form;
pub use client_form::ClientFormView;

mod project_form;
pub use project_form::ProjectFormView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;
