//! Toast notifications shown in the bottom-right corner
//!
//! Pages report outcomes through [`ToastService`]; each toast removes itself
//! after [`AppConfig::TOAST_LIFETIME_MS`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::config::AppConfig;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Visible toasts in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn info(&self, title: &str, description: &str) {
        self.show(ToastKind::Info, title, description);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.show(ToastKind::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn show(&self, kind: ToastKind, title: &str, description: &str) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, title, description));

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(AppConfig::TOAST_LIFETIME_MS).await;
            this.dismiss(id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-viewport">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class="toast"
                            class:toast--error=toast.kind == ToastKind::Error
                            role="status"
                        >
                            <div class="toast__text">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__description">{toast.description}</div>
                            </div>
                            <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Info, "Saved", "");
        let b = queue.push(ToastKind::Error, "Error", "Nope");
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss_only_removes_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Info, "A", "");
        let b = queue.push(ToastKind::Info, "B", "");
        queue.dismiss(a);
        queue.dismiss(999);
        let ids: Vec<u64> = queue.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![b]);
    }
}
