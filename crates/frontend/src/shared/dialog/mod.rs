pub mod frame;

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

use self::frame::DialogFrame;

/// Surface overrides for one stacked dialog.
#[derive(Clone, Default, PartialEq)]
pub struct FrameOptions {
    pub style: Option<String>,
    pub class: Option<String>,
}

#[derive(Clone)]
struct DialogEntry {
    id: u64,
    builder: Arc<dyn Fn(DialogHandle) -> AnyView + Send + Sync>,
    frame: FrameOptions,
}

/// A handle returned by [`DialogStackService::push`].
///
/// Can be cloned and used inside event handlers to close the dialog.
#[derive(Clone, Copy)]
pub struct DialogHandle {
    id: u64,
    svc: DialogStackService,
}

impl DialogHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Centralized dialog stack: every open dialog lives in this one ordered
/// list, stacked editors included.
///
/// - Supports push/close/pop
/// - Escape closes only the topmost dialog (handled by `DialogHost`)
#[derive(Clone, Copy)]
pub struct DialogStackService {
    stack: RwSignal<Vec<DialogEntry>>,
    next_id: RwSignal<u64>,
}

impl DialogStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(DialogStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Defer to next tick to avoid "closure invoked ... after being
            // dropped" when a dialog is removed synchronously during the
            // originating DOM event dispatch.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        !self.stack.get().is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.get().len()
    }

    /// Push a new dialog onto the stack.
    ///
    /// `builder` receives a [`DialogHandle`] so the dialog can close itself.
    pub fn push<F>(&self, builder: F) -> DialogHandle
    where
        F: Fn(DialogHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_framed(FrameOptions::default(), builder)
    }

    /// Push a new dialog with style/class overrides for the surface.
    pub fn push_framed<F>(&self, frame: FrameOptions, builder: F) -> DialogHandle
    where
        F: Fn(DialogHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let handle = DialogHandle { id, svc: *self };
        let builder = Arc::new(builder) as Arc<dyn Fn(DialogHandle) -> AnyView + Send + Sync>;

        self.stack.update(|s| {
            s.push(DialogEntry { id, builder, frame });
        });

        handle
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| {
            s.retain(|e| e.id != id);
        });
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

pub fn use_dialogs() -> DialogStackService {
    use_context::<DialogStackService>()
        .expect("DialogStackService not provided in context (provide it in app root)")
}

/// Renders the dialog stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn DialogHost() -> impl IntoView {
    let svc = use_dialogs();

    // Global Escape handler: closes only the topmost dialog.
    Effect::new(move |_| {
        let svc = svc;

        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open() {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // DialogHost is mounted once for the whole app lifetime; keep
            // closure alive.
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, DialogEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    // z-index based on current stack order
                    let z_index = 1000 + idx as i32;
                    let on_close = {
                        let svc = svc;
                        let id = entry.id;
                        Callback::new(move |_| {
                            svc.close_deferred(id);
                        })
                    };

                    let handle = DialogHandle { id: entry.id, svc };
                    let view = (entry.builder)(handle);

                    view! {
                        <DialogFrame
                            z_index=z_index
                            on_close=on_close
                            surface_class=entry.frame.class.clone().unwrap_or_default()
                            surface_style=entry.frame.style.clone().unwrap_or_default()
                        >
                            {view}
                        </DialogFrame>
                    }
                }
            />
        </Show>
    }
}
