//! ViewModel behind every dialog form: a draft in a signal plus the last error

use contracts::domain::common::ValidationError;
use leptos::prelude::*;

use crate::shared::toast::ToastService;

pub struct FormViewModel<D: Send + Sync + 'static> {
    pub form: RwSignal<D>,
    pub error: RwSignal<Option<String>>,
}

impl<D: Send + Sync + 'static> Clone for FormViewModel<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for FormViewModel<D> {}

impl<D: Clone + Send + Sync + 'static> FormViewModel<D> {
    pub fn new(initial: D) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
        }
    }

    /// Read side of a text field
    pub fn text<F>(&self, get: F) -> Signal<String>
    where
        F: Fn(&D) -> String + Send + Sync + 'static,
    {
        let form = self.form;
        Signal::derive(move || form.with(|f| get(f)))
    }

    /// Read side of a checkbox or switch
    pub fn flag<F>(&self, get: F) -> Signal<bool>
    where
        F: Fn(&D) -> bool + Send + Sync + 'static,
    {
        let form = self.form;
        Signal::derive(move || form.with(|f| get(f)))
    }

    /// Write side of any field; clears a previous error
    pub fn setter<V, F>(&self, set: F) -> Callback<V>
    where
        V: 'static,
        F: Fn(&mut D, V) + Send + Sync + 'static,
    {
        let form = self.form;
        let error = self.error;
        Callback::new(move |value| {
            form.update(|f| set(f, value));
            error.set(None);
        })
    }

    /// Validate the current draft and hand it to `on_saved`.
    ///
    /// On failure the error is kept for inline display and shown as a toast.
    pub fn save_command<V>(&self, validate: V, toasts: ToastService, on_saved: Callback<D>)
    where
        V: FnOnce(&D) -> Result<(), ValidationError>,
    {
        let current = self.form.get_untracked();
        match validate(&current) {
            Ok(()) => {
                self.error.set(None);
                on_saved.run(current);
            }
            Err(e) => {
                log::warn!("form rejected: {}", e);
                toasts.error(e.title(), &e.to_string());
                self.error.set(Some(e.to_string()));
            }
        }
    }
}
