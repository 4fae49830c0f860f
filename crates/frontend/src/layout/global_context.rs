use leptos::prelude::*;

/// UI state shared by the layout chrome
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
        log::debug!("sidebar open: {}", self.left_open.get_untracked());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
