use contracts::domain::a002_planning_item::{self, PlanningItem, PlanningItemDraft, PlanningStats};
use contracts::domain::common::{Flag, Record};
use leptos::prelude::*;

use crate::domain::a002_planning_item::ui::details::PlanningItemDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table_toggle::{TableToggle, TagChip};
use crate::shared::components::ui::{Button, Select};
use crate::shared::date_utils::format_date;
use crate::shared::list_state::{create_state, search_binding, submit_draft, toggle_flag};
use crate::shared::list_utils::{highlight_matches, SearchInput, SortHeader, StatusFilter};
use crate::shared::toast::use_toast;

#[component]
#[allow(non_snake_case)]
pub fn PlanningItemList() -> impl IntoView {
    let state = create_state(a002_planning_item::seed());
    let toasts = use_toast();
    let (search, on_search) = search_binding(state);
    let status_filter = RwSignal::new(StatusFilter::All);
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);
    let show_add = RwSignal::new(false);

    let stats = Memo::new(move |_| state.with(|s| PlanningStats::collect(&s.store)));

    let rows = move || {
        let status = status_filter.get();
        let field = sort_field.get();
        let ascending = sort_ascending.get();
        state.with(|s| s.visible(|item: &PlanningItem| status.matches(item.status), &field, ascending))
    };

    let on_saved = Callback::new(move |draft: PlanningItemDraft| {
        if submit_draft(state, draft, toasts) {
            show_add.set(false);
        }
    });

    view! {
        <div class="page">
            <PageHeader title={PlanningItem::list_name()} subtitle="Manage vendors and services for event planning">
                <Button icon_name="plus" on_click=Callback::new(move |_| show_add.set(true))>
                    "Add New"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Items"
                    icon_name="clipboard"
                    value=Signal::derive(move || stats.get().total.to_string())
                />
                <StatCard
                    label="Active Items"
                    icon_name="check"
                    value=Signal::derive(move || stats.get().active.to_string())
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
                    <SearchInput value=search on_change=on_search placeholder="Search planning items..." />
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
                                <SortHeader label="Name" field="name" sort_field=sort_field sort_ascending=sort_ascending />
                                <SortHeader label="Vendor" field="vendor" sort_field=sort_field sort_ascending=sort_ascending />
                                <th class="table__header-cell">"Pricing"</th>
                                <th class="table__header-cell">"Tags"</th>
                                <SortHeader label="Status" field="status" sort_field=sort_field sort_ascending=sort_ascending />
                                <SortHeader label="Updated" field="updated" sort_field=sort_field sort_ascending=sort_ascending />
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let term = search.get();
                                rows().into_iter().map(|item| {
                                    let id = item.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <img class="table__thumb" src=item.image.clone() alt=item.name.clone() />
                                            </td>
                                            <td class="table__cell">{highlight_matches(&item.name, &term)}</td>
                                            <td class="table__cell">
                                                <div class="table__title">{highlight_matches(&item.vendor, &term)}</div>
                                                <div class="table__subtitle">{item.vendor_contact.clone()}</div>
                                            </td>
                                            <td class="table__cell">{item.pricing.clone()}</td>
                                            <td class="table__cell">
                                                <TagChip
                                                    label="Featured"
                                                    active=item.featured
                                                    on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Featured))
                                                />
                                                <TagChip
                                                    label="Slider"
                                                    active=item.slider
                                                    on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Slider))
                                                />
                                            </td>
                                            <TableToggle
                                                checked=item.status
                                                title="Toggle status"
                                                on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Status))
                                            />
                                            <td class="table__cell">{format_date(item.updated)}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || rows().is_empty()>
                        <p class="table__empty">"No planning items match the current filters."</p>
                    </Show>
                </div>
            </div>

            <Show when=move || show_add.get()>
                <PlanningItemDetails on_saved=on_saved on_cancel=Callback::new(move |_| show_add.set(false)) />
            </Show>
        </div>
    }
}
