use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Count card shown above list pages and on the dashboard
#[component]
pub fn StatCard(
    /// Label displayed under the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)] value: Signal<String>,
    /// Optional breakdown line, e.g. "2 services, 1 rental"
    #[prop(optional, into)]
    detail: Signal<Option<String>>,
    /// Route for a "View Details" link
    #[prop(optional, into)]
    link: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__label">{label}</div>
                {move || detail.get().map(|d| view! {
                    <div class="stat-card__detail">{d}</div>
                })}
                {link.map(|href| view! {
                    <A href=href attr:class="stat-card__link">
                        "View Details"
                        {icon("arrow-right")}
                    </A>
                })}
            </div>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
        </div>
    }
}
