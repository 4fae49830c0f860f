use std::sync::Arc;

use contracts::domain::a007_content_section::{self, ContentSection, ContentSectionDraft};
use contracts::domain::common::Record;
use leptos::prelude::*;

use crate::domain::a007_content_section::ui::details::ContentSectionDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::{format_date, today};
use crate::shared::list_state::{create_state, search_binding, submit_edit};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::toast::use_toast;

/// Website sections as a card grid
#[component]
#[allow(non_snake_case)]
pub fn ContentSectionList() -> impl IntoView {
    let state = create_state(a007_content_section::seed());
    let toasts = use_toast();
    let (search, on_search) = search_binding(state);
    let editing = RwSignal::new(None::<Arc<ContentSection>>);

    let cards = move || state.with(|s| s.filtered(|_| true));

    let on_saved = Callback::new(move |draft: ContentSectionDraft| {
        let Some(section) = editing.get_untracked() else {
            return;
        };
        if submit_edit(state, draft.apply_to(&section, today()), toasts) {
            editing.set(None);
        }
    });

    view! {
        <div class="page">
            <PageHeader title={ContentSection::list_name()} subtitle="Edit the content of your website sections">
                <SearchInput value=search on_change=on_search placeholder="Search sections..." />
            </PageHeader>

            <div class="card-grid">
                {move || {
                    let term = search.get();
                    cards().into_iter().map(|section| {
                        let for_edit = Arc::clone(&section);
                        view! {
                            <div class="card content-card">
                                <img class="content-card__image" src=section.image.clone() alt=section.title.clone() />
                                <div class="content-card__body">
                                    <h3 class="content-card__title">{highlight_matches(&section.title, &term)}</h3>
                                    <p class="content-card__subtitle">{highlight_matches(&section.subtitle, &term)}</p>
                                    <p class="content-card__text">{section.body.clone()}</p>
                                </div>
                                <div class="content-card__footer">
                                    <span class="content-card__updated">
                                        {format!("Last updated: {}", format_date(section.last_updated))}
                                    </span>
                                    <Button
                                        variant="secondary"
                                        size="sm"
                                        icon_name="edit"
                                        on_click=Callback::new(move |_| editing.set(Some(Arc::clone(&for_edit))))
                                    >
                                        "Edit"
                                    </Button>
                                </div>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
            <Show when=move || cards().is_empty()>
                <p class="table__empty">"No sections match your search."</p>
            </Show>

            {move || editing.get().map(|section| view! {
                <ContentSectionDetails
                    section=section
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}
