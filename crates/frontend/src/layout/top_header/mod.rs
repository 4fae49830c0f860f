//! Top bar: sidebar toggle, page context and the logout button

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let toasts = use_toast();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(set_auth_state);
        toasts.info("Logged out", "You have been signed out.");
        navigate("/login", Default::default());
    };

    view! {
        <header class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_left()
                title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
            >
                {icon("menu")}
            </button>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>
                <span class="top-header__user">
                    {move || auth_state.with(|s| s.user.full_name.clone())}
                </span>
                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
