use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::config::AppConfig;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginRequest::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_auth_state) = use_auth();
    let toasts = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match do_login(&form.get_untracked(), set_auth_state) {
            Ok(()) => {
                set_error_message.set(None);
                toasts.info(
                    "Login Successful",
                    &format!("Welcome to {}!", AppConfig::full_title()),
                );
                navigate("/", Default::default());
            }
            Err(e) => {
                log::warn!("login rejected: {}", e);
                toasts.error("Error", &e.to_string());
                set_error_message.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1 class="login-box__brand">{AppConfig::BRAND}</h1>
                <h2 class="login-box__title">{AppConfig::SUBTITLE}</h2>
                <p class="login-box__hint">"Sign in to manage your events business"</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="••••••••"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="button button--primary login-box__submit">
                        "Sign in"
                    </button>
                </form>
            </div>
        </div>
    }
}
