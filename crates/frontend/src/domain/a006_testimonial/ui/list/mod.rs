use contracts::domain::a006_testimonial::{self, Testimonial, TestimonialDraft};
use contracts::domain::common::{Flag, Record};
use leptos::prelude::*;

use crate::domain::a006_testimonial::ui::details::TestimonialDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::star_rating::StarRating;
use crate::shared::components::table_toggle::TableToggle;
use crate::shared::components::ui::{Button, Select};
use crate::shared::config::AppConfig;
use crate::shared::list_state::{create_state, search_binding, submit_draft, toggle_flag, ListState};
use crate::shared::list_utils::{highlight_matches, SearchInput, SortHeader, StatusFilter};
use crate::shared::toast::{use_toast, ToastService};

/// Featured filter values
const FEATURED_OPTIONS: [&str; 3] = ["All", "Featured", "Not Featured"];

fn featured_matches(filter: &str, featured: bool) -> bool {
    match filter {
        "Featured" => featured,
        "Not Featured" => !featured,
        _ => true,
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn delete_testimonial(state: RwSignal<ListState<Testimonial>>, id: u32, toasts: ToastService) {
    let name = state.with_untracked(|s| s.store.get(&id).map(|t| t.display_name().to_string()));
    let Some(name) = name else {
        return;
    };
    if !confirm(&format!("Delete the testimonial from {}?", name)) {
        return;
    }
    state.update(|s| s.store = s.store.removed(&id));
    log::info!("a006_testimonial: removed {}", id);
    toasts.info(
        "Testimonial Deleted",
        "The testimonial has been removed successfully.",
    );
}

#[component]
#[allow(non_snake_case)]
pub fn TestimonialList() -> impl IntoView {
    let state = create_state(a006_testimonial::seed());
    let toasts = use_toast();
    let (search, on_search) = search_binding(state);
    let featured_filter = RwSignal::new(FEATURED_OPTIONS[0].to_string());
    let status_filter = RwSignal::new(StatusFilter::All);
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);
    let show_add = RwSignal::new(false);

    let rows = move || {
        let featured = featured_filter.get();
        let status = status_filter.get();
        let field = sort_field.get();
        let ascending = sort_ascending.get();
        state.with(|s| {
            s.visible(
                |t: &Testimonial| featured_matches(&featured, t.featured) && status.matches(t.status),
                &field,
                ascending,
            )
        })
    };

    let on_saved = Callback::new(move |draft: TestimonialDraft| {
        if submit_draft(state, draft, toasts) {
            show_add.set(false);
        }
    });

    view! {
        <div class="page">
            <PageHeader title={Testimonial::list_name()} subtitle="Manage client reviews shown on the website">
                <Button icon_name="plus" on_click=Callback::new(move |_| show_add.set(true))>
                    "Add Testimonial"
                </Button>
            </PageHeader>

            <div class="card">
                <div class="filter-bar">
                    <SearchInput value=search on_change=on_search placeholder="Search testimonials..." />
                    <Select
                        value=featured_filter
                        on_change=Callback::new(move |v| featured_filter.set(v))
                        options={FEATURED_OPTIONS.iter().map(|o| (o.to_string(), o.to_string())).collect::<Vec<_>>()}
                    />
                    <Select
                        value=Signal::derive(move || status_filter.get().as_str().to_string())
                        on_change=Callback::new(move |v: String| status_filter.set(StatusFilter::parse(&v)))
                        options=StatusFilter::options()
                    />
                </div>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SortHeader label="Client" field="client" sort_field=sort_field sort_ascending=sort_ascending />
                                <SortHeader label="Event Type" field="event_type" sort_field=sort_field sort_ascending=sort_ascending />
                                <th class="table__header-cell">"Testimonial"</th>
                                <SortHeader label="Rating" field="rating" sort_field=sort_field sort_ascending=sort_ascending />
                                <th class="table__header-cell">"Featured"</th>
                                <SortHeader label="Status" field="status" sort_field=sort_field sort_ascending=sort_ascending />
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let term = search.get();
                                rows().into_iter().map(|t| {
                                    let id = t.id;
                                    let avatar = t
                                        .avatar
                                        .clone()
                                        .unwrap_or_else(|| AppConfig::AVATAR_PLACEHOLDER.to_string());
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <div class="table__person">
                                                    <img class="avatar" src=avatar alt=t.client.clone() />
                                                    <div>
                                                        <div class="table__title">{highlight_matches(&t.client, &term)}</div>
                                                        <div class="table__subtitle">{highlight_matches(&t.location, &term)}</div>
                                                    </div>
                                                </div>
                                            </td>
                                            <td class="table__cell">{highlight_matches(&t.event_type, &term)}</td>
                                            <td class="table__cell table__cell--wrap">{highlight_matches(&t.preview, &term)}</td>
                                            <td class="table__cell">
                                                <StarRating rating=t.rating />
                                            </td>
                                            <TableToggle
                                                checked=t.featured
                                                title="Toggle featured"
                                                on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Featured))
                                            />
                                            <TableToggle
                                                checked=t.status
                                                title="Toggle status"
                                                on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Status))
                                            />
                                            <td class="table__cell table__cell--actions">
                                                <Button
                                                    variant="danger"
                                                    size="sm"
                                                    icon_name="trash"
                                                    title="Delete testimonial"
                                                    on_click=Callback::new(move |_| delete_testimonial(state, id, toasts))
                                                >
                                                    "Delete"
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || rows().is_empty()>
                        <p class="table__empty">"No testimonials match the current filters."</p>
                    </Show>
                </div>
            </div>

            <Show when=move || show_add.get()>
                <TestimonialDetails on_saved=on_saved on_cancel=Callback::new(move |_| show_add.set(false)) />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_filter() {
        assert!(featured_matches("All", false));
        assert!(featured_matches("Featured", true));
        assert!(!featured_matches("Featured", false));
        assert!(featured_matches("Not Featured", false));
        assert!(!featured_matches("Not Featured", true));
    }
}
