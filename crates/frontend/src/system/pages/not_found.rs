use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    log::warn!("no route for {}", pathname.get_untracked());

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__text">"Oops! Page not found"</p>
            <A href="/" attr:class="not-found__link">"Return to Home"</A>
        </div>
    }
}
