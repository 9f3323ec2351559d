pub mod capabilities;
pub mod models;
pub mod resource;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use capabilities::Capabilities;
pub use models::{
    format_date, Client, ClientInput, Project, ProjectClient, ProjectInput, Role, User,
};
pub use resource::{Collection, ListState, PendingDelete, RequestGeneration, Ticket};
pub use session::{Session, SessionPhase, SessionStore};
pub use storage::{KeyValueStorage, StorageError};
