use crate::shared::icons::icon;
use contracts::domain::a006_testimonial::MAX_RATING;
use leptos::prelude::*;

/// Row of five stars; clickable when `on_select` is given
#[component]
pub fn StarRating(
    #[prop(into)] rating: Signal<u8>,
    #[prop(optional)] on_select: Option<Callback<u8>>,
) -> impl IntoView {
    (1..=MAX_RATING)
        .map(|star| {
            let filled = move || star <= rating.get();
            view! {
                <span
                    class="star"
                    class:star--filled=filled
                    class:star--clickable=on_select.is_some()
                    on:click=move |_| {
                        if let Some(select) = on_select {
                            select.run(star);
                        }
                    }
                >
                    {icon("star")}
                </span>
            }
        })
        .collect_view()
}
