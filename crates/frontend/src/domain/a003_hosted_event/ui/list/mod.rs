use contracts::domain::a003_hosted_event::{self, EventStats, EventType, HostedEvent, HostedEventDraft};
use contracts::domain::common::{Flag, Record};
use leptos::prelude::*;

use crate::domain::a003_hosted_event::ui::details::HostedEventDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table_toggle::{TableToggle, TagChip};
use crate::shared::components::ui::select::options_of;
use crate::shared::components::ui::{Badge, Button, Select};
use crate::shared::date_utils::format_date;
use crate::shared::list_state::{create_state, search_binding, submit_draft, toggle_flag};
use crate::shared::list_utils::{highlight_matches, SearchInput, SortHeader, StatusFilter};
use crate::shared::toast::use_toast;

fn type_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "All Types".to_string())];
    options.extend(options_of(EventType::ALL.iter().map(EventType::as_str)));
    options
}

fn type_variant(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Wedding => "primary",
        EventType::Corporate => "success",
        EventType::Social => "warning",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn HostedEventList() -> impl IntoView {
    let state = create_state(a003_hosted_event::seed());
    let toasts = use_toast();
    let (search, on_search) = search_binding(state);
    let type_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(StatusFilter::All);
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);
    let show_add = RwSignal::new(false);

    let stats = Memo::new(move |_| state.with(|s| EventStats::collect(&s.store)));

    let rows = move || {
        let event_type = EventType::parse(&type_filter.get());
        let status = status_filter.get();
        let field = sort_field.get();
        let ascending = sort_ascending.get();
        state.with(|s| {
            s.visible(
                |e: &HostedEvent| {
                    event_type.map_or(true, |t| e.event_type == t) && status.matches(e.status)
                },
                &field,
                ascending,
            )
        })
    };

    let on_saved = Callback::new(move |draft: HostedEventDraft| {
        if submit_draft(state, draft, toasts) {
            show_add.set(false);
        }
    });

    view! {
        <div class="page">
            <PageHeader title={HostedEvent::list_name()} subtitle="Showcase the events you have hosted">
                <Button icon_name="plus" on_click=Callback::new(move |_| show_add.set(true))>
                    "Add New Event"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Events"
                    icon_name="party"
                    value=Signal::derive(move || stats.get().total.to_string())
                />
                <StatCard
                    label="Active Events"
                    icon_name="check"
                    value=Signal::derive(move || stats.get().active.to_string())
                />
                <StatCard
                    label="Featured Events"
                    icon_name="star"
                    value=Signal::derive(move || stats.get().featured.to_string())
                />
                <StatCard
                    label="Slider Images"
                    icon_name="image"
                    value=Signal::derive(move || stats.get().slider_images.to_string())
                />
            </div>

            <div class="card">
                <div class="filter-bar">
                    <SearchInput value=search on_change=on_search placeholder="Search events..." />
                    <Select
                        value=type_filter
                        on_change=Callback::new(move |v| type_filter.set(v))
                        options=type_options()
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
                                <SortHeader label="Event" field="title" sort_field=sort_field sort_ascending=sort_ascending />
                                <SortHeader label="Date" field="date" sort_field=sort_field sort_ascending=sort_ascending />
                                <SortHeader label="Type" field="type" sort_field=sort_field sort_ascending=sort_ascending />
                                <th class="table__header-cell">"Images"</th>
                                <th class="table__header-cell">"Tags"</th>
                                <SortHeader label="Status" field="status" sort_field=sort_field sort_ascending=sort_ascending />
                                <SortHeader label="Updated" field="updated" sort_field=sort_field sort_ascending=sort_ascending />
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let term = search.get();
                                rows().into_iter().map(|event| {
                                    let id = event.id;
                                    let event_type = event.event_type;
                                    let term = term.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <img class="table__thumb" src=event.image.clone() alt=event.title.clone() />
                                            </td>
                                            <td class="table__cell">{highlight_matches(&event.title, &term)}</td>
                                            <td class="table__cell">{event.date.clone()}</td>
                                            <td class="table__cell">
                                                <Badge variant=type_variant(event.event_type)>
                                                    {highlight_matches(event_type.as_str(), &term)}
                                                </Badge>
                                            </td>
                                            <td class="table__cell">{event.image_count}</td>
                                            <td class="table__cell">
                                                <TagChip
                                                    label="Featured"
                                                    active=event.featured
                                                    on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Featured))
                                                />
                                                <TagChip
                                                    label="Slider"
                                                    active=event.slider
                                                    on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Slider))
                                                />
                                            </td>
                                            <TableToggle
                                                checked=event.status
                                                title="Toggle status"
                                                on_toggle=Callback::new(move |_| toggle_flag(state, id, Flag::Status))
                                            />
                                            <td class="table__cell">{format_date(event.updated)}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || rows().is_empty()>
                        <p class="table__empty">"No events match the current filters."</p>
                    </Show>
                </div>
            </div>

            <Show when=move || show_add.get()>
                <HostedEventDetails on_saved=on_saved on_cancel=Callback::new(move |_| show_add.set(false)) />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_options_cover_every_type() {
        let values: Vec<String> = type_options().into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["", "Wedding", "Corporate", "Social"]);
    }
}
