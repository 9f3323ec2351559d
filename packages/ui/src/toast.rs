use std::time::Duration;

use dioxus::prelude::*;

/// How long a toast stays up before dismissing itself.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    current: Signal<Option<ToastMessage>>,
    counter: Signal<u64>,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    pub fn dismiss(&self) {
        let mut current = self.current;
        current.set(None);
    }

    fn show(&self, message: String, kind: ToastKind) {
        let mut counter = self.counter;
        let mut current = self.current;
        let id = {
            let mut next = counter.write();
            *next += 1;
            *next
        };
        current.set(Some(ToastMessage { id, message, kind }));

        // Not scoped to the calling view; it may unmount before the timer fires.
        let _ = dioxus::core::spawn_forever(async move {
            sleep(TOAST_DURATION).await;
            let expired = still_showing(current.peek().as_ref(), id);
            if expired {
                current.set(None);
            }
        });
    }
}

/// A newer toast owns the slot once its id differs.
fn still_showing(current: Option<&ToastMessage>, id: u64) -> bool {
    current.map(|t| t.id) == Some(id)
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

pub fn use_toast() -> Toaster {
    use_context::<Toaster>()
}

/// Provides a [`Toaster`] to `children` and renders the active toast above them.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let current = use_signal(|| Option::<ToastMessage>::None);
    let counter = use_signal(|| 0u64);
    let toaster = use_context_provider(|| Toaster { current, counter });

    let active = current().map(|toast| {
        let class = match toast.kind {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        };
        (toast.message, class)
    });

    rsx! {
        {children}
        if let Some((message, class)) = active {
            div {
                class: "toast-host",
                role: "status",
                div {
                    class,
                    span { "{message}" }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        onclick: move |_| toaster.dismiss(),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> ToastMessage {
        ToastMessage {
            id,
            message: "Project deleted.".into(),
            kind: ToastKind::Success,
        }
    }

    #[test]
    fn test_timer_clears_only_its_own_toast() {
        assert!(still_showing(Some(&toast(3)), 3));
        assert!(!still_showing(Some(&toast(4)), 3));
        assert!(!still_showing(None, 3));
    }
}
