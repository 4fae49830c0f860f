//! Page-local state shared by every entity list page

use std::sync::Arc;

use contracts::domain::common::{
    Draft, EntityStore, Flag, Flagged, Record, RecordId, SequentialId, ValidationError,
};
use contracts::shared::list::{sort_list, Sortable};
use leptos::prelude::*;

use crate::shared::date_utils::today;
use crate::shared::toast::ToastService;

/// Records of one page plus the search box
#[derive(Clone)]
pub struct ListState<T> {
    pub store: EntityStore<T>,
    pub search: String,
}

impl<T: Record> ListState<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            store: EntityStore::new(seed),
            search: String::new(),
        }
    }

    /// Records matching the search box and `predicate`, in store order
    pub fn filtered<P>(&self, predicate: P) -> Vec<Arc<T>>
    where
        P: Fn(&T) -> bool,
    {
        self.store.search_where(&self.search, predicate)
    }
}

impl<T: Record + Sortable> ListState<T> {
    /// [`ListState::filtered`] ordered by a sort header; an empty field keeps store order
    pub fn visible<P>(&self, predicate: P, sort_field: &str, ascending: bool) -> Vec<Arc<T>>
    where
        P: Fn(&T) -> bool,
    {
        let mut rows = self.filtered(predicate);
        if !sort_field.is_empty() {
            sort_list(&mut rows, sort_field, ascending);
        }
        rows
    }
}

pub fn create_state<T: Record>(seed: Vec<T>) -> RwSignal<ListState<T>> {
    RwSignal::new(ListState::new(seed))
}

/// Search box bindings for [`SearchInput`](crate::shared::list_utils::SearchInput)
pub fn search_binding<T: Record>(
    state: RwSignal<ListState<T>>,
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || state.with(|s| s.search.clone())),
        Callback::new(move |term: String| state.update(|s| s.search = term)),
    )
}

/// Invert `flag` of record `id`; unknown ids leave the page untouched
pub fn toggle_flag<T>(state: RwSignal<ListState<T>>, id: T::Id, flag: Flag)
where
    T: Record + Flagged,
{
    state.update(|s| s.store = s.store.toggled(&id, flag));
    log::info!(
        "{}: toggled {} on {}",
        T::full_name(),
        flag.label(),
        id.as_string()
    );
}

/// Validate `draft` and append it to the page store.
///
/// Reports the outcome with a toast and returns whether the record was added.
pub fn submit_draft<T, D>(state: RwSignal<ListState<T>>, draft: D, toasts: ToastService) -> bool
where
    T: Record,
    T::Id: SequentialId,
    D: Draft<T>,
{
    let result = state.with_untracked(|s| s.store.added(draft, today()));
    match result {
        Ok((store, id)) => {
            state.update(|s| s.store = store);
            log::info!("{}: added {}", T::full_name(), id.as_string());
            toasts.info(
                &format!("{} Added", T::element_name()),
                &format!(
                    "The new {} has been added successfully.",
                    T::element_name().to_lowercase()
                ),
            );
            true
        }
        Err(e) => {
            log::warn!("{}: add rejected: {}", T::full_name(), e);
            toasts.error(e.title(), &e.to_string());
            false
        }
    }
}

/// Put an edited record back in place of the one with the same id
pub fn submit_edit<T: Record>(
    state: RwSignal<ListState<T>>,
    edited: Result<T, ValidationError>,
    toasts: ToastService,
) -> bool {
    match edited {
        Ok(record) => {
            let id = record.id().as_string();
            state.update(|s| s.store = s.store.replaced(record));
            log::info!("{}: updated {}", T::full_name(), id);
            toasts.info(
                &format!("{} Updated", T::element_name()),
                &format!(
                    "The {} has been updated successfully.",
                    T::element_name().to_lowercase()
                ),
            );
            true
        }
        Err(e) => {
            log::warn!("{}: update rejected: {}", T::full_name(), e);
            toasts.error(e.title(), &e.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_service::{self, Service, ServiceCategory};

    #[test]
    fn test_filtered_keeps_store_order() {
        let mut state = ListState::new(a001_service::seed());
        state.search = "service".into();
        let ids: Vec<u32> = state.filtered(|_| true).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_visible_applies_sort_and_predicate() {
        let state = ListState::new(a001_service::seed());
        let titles: Vec<String> = state
            .visible(|s: &Service| s.category == ServiceCategory::Service, "title", false)
            .iter()
            .map(|s| s.title.clone())
            .collect();
        assert_eq!(titles, vec!["Photography Service", "Event Coordination"]);
    }

    #[test]
    fn test_unsorted_by_default() {
        let state = ListState::new(a001_service::seed());
        let ids: Vec<u32> = state.visible(|_| true, "", true).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
