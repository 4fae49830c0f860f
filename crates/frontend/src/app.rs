use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastService, ToastViewport};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar state for the whole app
    provide_context(AppGlobalContext::new());

    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastViewport />
        </AuthProvider>
    }
}
