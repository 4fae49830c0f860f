use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders children while signed in, otherwise redirects to the login page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.authenticated)
            fallback=|| {
                log::debug!("not signed in, redirecting to /login");
                view! { <Redirect path="/login" /> }
            }
        >
            {children()}
        </Show>
    }
}
