use contracts::domain::a001_service::{self, Service, ServiceCategory, ServiceDraft, ServiceStats};
use contracts::domain::common::{Flag, Record};
use leptos::prelude::*;

use crate::domain::a001_service::ui::details::ServiceDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table_toggle::{TableToggle, TagChip};
use crate::shared::components::ui::select::options_of;
use crate::shared::components::ui::{Button, Select};
use crate::shared::date_utils::format_date;
use crate::shared::list_state::{create_state, search_binding, submit_draft, toggle_flag};
use crate::shared::list_utils::{highlight_matches, SearchInput, SortHeader, StatusFilter};
use crate::shared::toast::use_toast;

fn category_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "All Categories".to_string())];
    options.extend(options_of(ServiceCategory::ALL.iter().map(ServiceCategory::as_str)));
    options
}

fn split(services: usize, rentals: usize) -> String {
    format!("{} services, {} rentals", services, rentals)
}

#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    let state = create_state(a001_service::seed());
    let toasts = use_toast();
    let (search, on_search) = search_binding(state);
    let category_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(StatusFilter::All);
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);
    let show_add = RwSignal::new(false);

    let stats = Memo::new(move |_| state.with(|s| ServiceStats::collect(&s.store)));

    let rows = move || {
        let category = ServiceCategory::parse(&category_filter.get());
        let status = status_filter.get();
        let field = sort_field.get();
        let ascending = sort_ascending.get();
        state.with(|s| {
            s.visible(
                |svc: &Service| {
                    category.map_or(true, |c| svc.category == c) && status.matches(svc.status)
                },
                &field,
                ascending,
            )
        })
    };

    let on_saved = Callback::new(move |draft: ServiceDraft| {
        if submit_draft(state, draft, toasts) {
            show_add.set(false);
        }
    });

    view! {
        <div class="page">
            <PageHeader title={Service::list_name()} subtitle="Manage your services and rentals offerings">
                <Button icon_name="plus" on_click=Callback::new(move |_| show_add.set(true))>
                    "Add New"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Items"
                    icon_name="monitor"
                    value=Signal::derive(move || stats.get().total.to_string())
                    detail=Signal::derive(move || {
                        let s = stats.get();
                        Some(split(s.services, s.rentals))
                    })
                />
                <StatCard
                    label="Active Items"
                    icon_name="check"
                    value=Signal::derive(move || stats.get().active.to_string())
                    detail=Signal::derive(move || {
                        let s = stats.get();
                        Some(split(s.active_services, s.active_rentals))
                    })
                />
                <StatCard
                    label="Featured Items"
                    icon_name="star"
                    value=Signal::derive(move || stats.get().featured.to_string())
                />
                <StatCard
                    label="Slider Images"
                    icon_name="image"
                    value=Signal::derive(move || stats.get().slider.to_string())
                />
            </div>

            <div class="card">
                <div class="filter-bar">
                    <SearchInput
                        value=search
                        on_change=on_search
                        placeholder="Search services or rentals..."
                    />
                    <Select
                        value=category_filter
                        on_change=Callback::new(move |v| category_filter.set(v))
                        options=category_options()
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
                                <th class="table__header-cell">"Image"</th>
                                <SortHeader label="Title" field="title" sort_field=sort_field sort_ascending=sort_ascending />
                                <SortHeader label="Category" field="category" sort_field=sort_field sort_ascending=sort_ascending />
                                <th class="table__header-cell">"Tags"</th>
                                <SortHeader label="Status" field="status" sort_field=sort_field sort_ascending=sort_ascending />
                                <SortHeader label="Updated" field="updated" sort_field=sort_field sort_ascending=sort_ascending />
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let term = search.get();
                                rows().into_iter().map(|svc| {
                                    let id = svc.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <img class="table__thumb" src=svc.image.clone() alt=svc.title.clone() />
                                            </td>
                                            <td class="table__cell">
                                                <div class="table__title">{highlight_matches(&svc.title, &term)}</div>
                                                <div class="table__subtitle">{svc.price.clone()}</div>
                                            </td>
                                            <td class="table__cell">{highlight_matches(svc.category.as_str(), &term)}</td>
                                            <td class="table__cell">
                                                <TagChip
                                                    label="Featured"
                                                    active=svc.featured
                                                    on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Featured))
                                                />
                                                <TagChip
                                                    label="Slider"
                                                    active=svc.slider
                                                    on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Slider))
                                                />
                                            </td>
                                            <TableToggle
                                                checked=svc.status
                                                title="Toggle status"
                                                on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Status))
                                            />
                                            <td class="table__cell">{format_date(svc.updated)}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || rows().is_empty()>
                        <p class="table__empty">"No items match the current filters."</p>
                    </Show>
                </div>
            </div>

            <Show when=move || show_add.get()>
                <ServiceDetails on_saved=on_saved on_cancel=Callback::new(move |_| show_add.set(false)) />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_start_with_all() {
        let options = category_options();
        assert_eq!(options[0], (String::new(), "All Categories".to_string()));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_split_text() {
        assert_eq!(split(2, 1), "2 services, 1 rentals");
    }

    #[test]
    fn test_header_title() {
        assert_eq!(Service::list_name(), "Services & Rentals");
    }
}
