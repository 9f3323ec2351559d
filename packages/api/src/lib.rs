//! # API crate: REST client and session orchestration for the dashboard
//!
//! Everything the frontend does over the network goes through this crate. It owns
//! the HTTP seam, the endpoint catalogue and the login/registration flow that
//! persists a session.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | API base URL from `API_URL` (build-time on wasm, `.env`/environment natively) |
//! | [`transport`] | `Transport` trait, request/response types, `reqwest` implementation |
//! | [`client`] | `ApiClient`: one method per REST endpoint, bearer-token handling |
//! | [`session`] | `SessionManager`: login, registration, logout with durable storage |
//! | [`deletion`] | Confirmed deletes followed by a list refresh |
//! | [`error`] | `ApiError` and the server `{ "message": ... }` extraction |
//! | [`messages`] | Fallback and empty-state texts shown to users |
//!
//! `MemoryTransport`, a scripted transport for tests, is only built under `cfg(test)`
//! or the `testing` feature.
//!
//! Domain models live in the `store` crate and are re-exported here so the UI can
//! depend on a single import path.

pub mod client;
pub mod config;
pub mod deletion;
pub mod error;
#[cfg(any(test, feature = "testing"))]
mod memory;
pub mod messages;
pub mod session;
pub mod transport;

pub use client::{ApiClient, AuthResponse, LoginRequest, RegisterRequest};
pub use config::ApiConfig;
pub use deletion::{delete_then_refresh, Record};
pub use error::ApiError;
#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryTransport;
pub use session::{SessionManager, SettleAuth};
pub use transport::{ApiRequest, ApiResponse, Method, ReqwestTransport, Transport};

pub use store::{format_date, Client, ClientInput, Project, ProjectClient, ProjectInput, Role, User};
