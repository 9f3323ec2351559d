//! Session context shared by every view.
//!
//! [`SessionProvider`] restores the persisted session once at start-up and provides a
//! [`SessionService`] through context. Views read state and capabilities from it and
//! mutate the session only through its actions; none of them touch storage.

use api::{
    messages, ApiClient, ApiConfig, LoginRequest, RegisterRequest, ReqwestTransport,
    SessionManager, SettleAuth,
};
use dioxus::prelude::*;
use store::{Capabilities, Session, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

pub type PlatformManager = SessionManager<ReqwestTransport, PlatformStorage>;

fn platform_manager() -> PlatformManager {
    let transport = ReqwestTransport::new(ApiConfig::from_env());
    tracing::debug!("API base URL: {}", transport.config().base_url());
    SessionManager::new(
        ApiClient::new(transport),
        SessionStore::new(PlatformStorage::new()),
    )
}

#[derive(Clone, Copy)]
pub struct SessionService {
    state: Signal<Session>,
    manager: Signal<PlatformManager>,
}

impl SessionService {
    pub fn state(&self) -> Signal<Session> {
        self.state
    }

    /// Subscribes the caller to session changes.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_session(&self.state.read())
    }

    /// REST client carrying the current token. Does not subscribe.
    pub fn api(&self) -> ApiClient<ReqwestTransport> {
        self.manager.peek().client_for(&self.state.peek())
    }

    /// Returns whether the login succeeded; on failure the session holds the message.
    pub async fn login(self, credentials: LoginRequest) -> bool {
        let mut state = self.state;
        state.write().begin();
        let manager = self.manager.peek().clone();
        let result = manager.login(&credentials).await;
        let ok = result.is_ok();
        state.write().settle(result, messages::LOGIN_FAILED);
        ok
    }

    pub async fn register(self, form: RegisterRequest) -> bool {
        let mut state = self.state;
        state.write().begin();
        let manager = self.manager.peek().clone();
        let result = manager.register(&form).await;
        let ok = result.is_ok();
        state.write().settle(result, messages::REGISTER_FAILED);
        ok
    }

    pub fn logout(self) {
        let mut state = self.state;
        self.manager.peek().logout(&mut state.write());
    }
}

pub fn use_session() -> SessionService {
    use_context::<SessionService>()
}

#[component]
pub fn SessionProvider(children: Element) -> Element {
    let manager = use_signal(platform_manager);
    let state = use_signal(move || manager.peek().restore());

    use_context_provider(|| SessionService { state, manager });

    rsx! {
        {children}
    }
}
