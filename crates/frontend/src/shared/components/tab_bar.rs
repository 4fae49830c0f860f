use leptos::prelude::*;

/// Horizontal tab strip; the active label is held by the caller
#[component]
pub fn TabBar(labels: Vec<&'static str>, active: RwSignal<&'static str>) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {labels.into_iter().map(|label| view! {
                <button
                    type="button"
                    role="tab"
                    class="tab-bar__tab"
                    class:tab-bar__tab--active=move || active.get() == label
                    on:click=move |_| active.set(label)
                >
                    {label}
                </button>
            }).collect_view()}
        </div>
    }
}
