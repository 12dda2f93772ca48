use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiError;

#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Transient toast notifications, one service for the whole app.
///
/// Each notice dismisses itself after a few seconds; clicking dismisses
/// it immediately.
#[derive(Clone, Copy)]
pub struct NoticeService {
    entries: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn push(&self, kind: NoticeKind, text: impl Into<String>) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let text = text.into();
        self.entries.update(|list| list.push(Notice { id, kind, text }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(6_000).await;
            svc.dismiss(id);
        });
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NoticeKind::Info, text);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text);
    }

    /// Announce an API failure. An expired session stays silent: the
    /// session reset already routes the user to the login screen.
    pub fn api_error(&self, err: &ApiError) {
        if matches!(err, ApiError::Unauthorized) {
            return;
        }
        log::error!("request failed: {}", err);
        self.error(err.to_string());
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|list| list.retain(|n| n.id != id));
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>()
        .expect("NoticeService not provided in context (provide it in app root)")
}

/// Renders the notice stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let svc = use_notices();

    view! {
        <div
            class="notice-host"
            style="position: fixed; top: 16px; right: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px; max-width: 360px;"
        >
            <For
                each=move || svc.entries.get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Error => "notice notice--error",
                        NoticeKind::Success => "notice notice--success",
                        NoticeKind::Info => "notice notice--info",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class on:click=move |_| svc.dismiss(id) title="Dismiss">
                            {notice.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
