//! Generic page-level collection of records.
//!
//! Every list page keeps one `EntityStore` in a signal. All operations are
//! copy-and-map: they return a new store and leave `self` untouched. Records
//! are shared through `Arc`, so entries an operation does not touch stay
//! pointer-equal between the old and the new store.

use chrono::NaiveDate;
use std::sync::Arc;

use super::{Draft, Flag, Flagged, Record, SequentialId, ValidationError};

#[derive(Debug)]
pub struct EntityStore<T> {
    items: Vec<Arc<T>>,
}

impl<T> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> FromIterator<T> for EntityStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<T: Record> EntityStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.items.iter()
    }

    pub fn get(&self, id: &T::Id) -> Option<&Arc<T>> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Records matching `term` (see [`Record::matches_search`]), in insertion order
    pub fn search(&self, term: &str) -> Vec<Arc<T>> {
        self.search_where(term, |_| true)
    }

    /// Search combined with an extra predicate (secondary filters of a page)
    pub fn search_where<P>(&self, term: &str, predicate: P) -> Vec<Arc<T>>
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| {
                let record: &T = item;
                record.matches_search(term) && predicate(record)
            })
            .cloned()
            .collect()
    }

    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| {
                let record: &T = item;
                predicate(record)
            })
            .count()
    }

    /// New store with the record `id` replaced by `f(record)`.
    ///
    /// Unknown ids leave the store as it is.
    pub fn updated<F>(&self, id: &T::Id, f: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        let mut f = Some(f);
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id() == id {
                    if let Some(f) = f.take() {
                        let record: &T = item;
                        return Arc::new(f(record));
                    }
                }
                Arc::clone(item)
            })
            .collect();
        Self { items }
    }

    /// New store where the record with the same id as `record` is replaced,
    /// keeping its position.
    pub fn replaced(&self, record: T) -> Self {
        let id = record.id().clone();
        self.updated(&id, move |_| record)
    }

    pub fn removed(&self, id: &T::Id) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        Self { items }
    }

    /// New store with `record` appended
    pub fn pushed(&self, record: T) -> Self {
        let mut items = self.items.clone();
        items.push(Arc::new(record));
        Self { items }
    }
}

impl<T: Record + Flagged> EntityStore<T> {
    /// New store where `flag` of record `id` is inverted.
    ///
    /// No-op for unknown ids and for records that do not carry `flag`.
    pub fn toggled(&self, id: &T::Id, flag: Flag) -> Self {
        let Some(current) = self.get(id) else {
            return self.clone();
        };
        match current.flag(flag).and_then(|value| current.with_flag(flag, !value)) {
            Some(next) => self.replaced(next),
            None => self.clone(),
        }
    }
}

impl<T> EntityStore<T>
where
    T: Record,
    T::Id: SequentialId,
{
    /// `max(existing ids) + 1`, or the first id for an empty store.
    ///
    /// `None` when the maximum id has no successor.
    pub fn next_id(&self) -> Option<T::Id> {
        match self.items.iter().map(|item| item.id()).max() {
            Some(max) => <T::Id as SequentialId>::next_after(max),
            None => Some(<T::Id as SequentialId>::first()),
        }
    }

    /// Validate `draft` and append the resulting record.
    ///
    /// Returns the new store together with the allocated id; on a validation
    /// error or an exhausted id space nothing is built and the caller keeps
    /// its current store.
    pub fn added<D>(&self, draft: D, today: NaiveDate) -> Result<(Self, T::Id), ValidationError>
    where
        D: Draft<T>,
    {
        draft.validate()?;
        let id = self.next_id().ok_or(ValidationError::IdsExhausted {
            entity: T::collection_name(),
        })?;
        let record = draft.into_record(id.clone(), today);
        Ok((self.pushed(record), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::draft::require;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u32,
        title: String,
        tag: String,
        status: bool,
        featured: bool,
    }

    impl Record for Note {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn display_name(&self) -> &str {
            &self.title
        }

        fn searchable_fields(&self) -> Vec<&str> {
            vec![&self.title, &self.tag]
        }

        fn aggregate_index() -> &'static str {
            "t001"
        }

        fn collection_name() -> &'static str {
            "note"
        }

        fn element_name() -> &'static str {
            "Note"
        }

        fn list_name() -> &'static str {
            "Notes"
        }
    }

    impl Flagged for Note {
        fn flag(&self, flag: Flag) -> Option<bool> {
            match flag {
                Flag::Status => Some(self.status),
                Flag::Featured => Some(self.featured),
                Flag::Slider => None,
            }
        }

        fn flag_mut(&mut self, flag: Flag) -> Option<&mut bool> {
            match flag {
                Flag::Status => Some(&mut self.status),
                Flag::Featured => Some(&mut self.featured),
                Flag::Slider => None,
            }
        }
    }

    struct NoteDraft {
        title: String,
    }

    impl Draft<Note> for NoteDraft {
        fn validate(&self) -> Result<(), ValidationError> {
            require(&self.title, "note", "title")
        }

        fn into_record(self, id: u32, _today: NaiveDate) -> Note {
            Note {
                id,
                title: self.title,
                tag: String::new(),
                status: true,
                featured: false,
            }
        }
    }

    fn note(id: u32, title: &str, tag: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
            tag: tag.to_string(),
            status: true,
            featured: false,
        }
    }

    fn store() -> EntityStore<Note> {
        EntityStore::new(vec![
            note(1, "Alpha", "red"),
            note(2, "Beta", "green"),
            note(3, "Gamma", "Red"),
        ])
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    fn ids(items: &[Arc<Note>]) -> Vec<u32> {
        items.iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_empty_search_returns_everything_in_order() {
        let s = store();
        assert_eq!(ids(&s.search("")), vec![1, 2, 3]);
    }

    #[test]
    fn test_whitespace_is_part_of_the_term() {
        let s = store();
        assert!(s.search("   ").is_empty());
        assert!(s.search("red ").is_empty());
        assert!(s.search(" red").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_all_fields() {
        let s = store();
        assert_eq!(ids(&s.search("RED")), vec![1, 3]);
        assert_eq!(ids(&s.search("et")), vec![2]);
        assert!(s.search("zzz").is_empty());
    }

    #[test]
    fn test_search_where_applies_predicate() {
        let s = store().toggled(&1, Flag::Status);
        assert_eq!(ids(&s.search_where("red", |n| n.status)), vec![3]);
    }

    #[test]
    fn test_toggle_inverts_only_target() {
        let before = store();
        let after = before.toggled(&2, Flag::Featured);

        assert!(after.get(&2).unwrap().featured);
        assert!(!before.get(&2).unwrap().featured);
        assert_eq!(after.get(&2).unwrap().title, "Beta");

        assert!(Arc::ptr_eq(before.get(&1).unwrap(), after.get(&1).unwrap()));
        assert!(Arc::ptr_eq(before.get(&3).unwrap(), after.get(&3).unwrap()));
        assert_eq!(ids(&after.search("")), vec![1, 2, 3]);
    }

    #[test]
    fn test_toggle_twice_restores_value() {
        let s = store().toggled(&3, Flag::Status).toggled(&3, Flag::Status);
        assert!(s.get(&3).unwrap().status);
    }

    #[test]
    fn test_toggle_unknown_id_or_missing_flag_is_noop() {
        let before = store();
        let after = before.toggled(&99, Flag::Status);
        let after_slider = before.toggled(&1, Flag::Slider);
        for id in 1..=3 {
            assert!(Arc::ptr_eq(before.get(&id).unwrap(), after.get(&id).unwrap()));
            assert!(Arc::ptr_eq(
                before.get(&id).unwrap(),
                after_slider.get(&id).unwrap()
            ));
        }
    }

    #[test]
    fn test_add_valid_draft_allocates_next_id() {
        let (s, id) = store()
            .added(NoteDraft { title: "Delta".into() }, today())
            .unwrap();
        assert_eq!(id, 4);
        assert_eq!(s.len(), 4);
        assert_eq!(s.iter().last().unwrap().title, "Delta");
    }

    #[test]
    fn test_add_uses_max_not_len() {
        let s = store().removed(&1).removed(&2);
        assert_eq!(s.next_id(), Some(4));
        assert_eq!(EntityStore::<Note>::default().next_id(), Some(1));
    }

    #[test]
    fn test_add_fails_when_ids_run_out() {
        let s = store().pushed(note(u32::MAX, "Omega", "blue"));
        assert_eq!(s.next_id(), None);

        let err = s
            .added(NoteDraft { title: "Delta".into() }, today())
            .unwrap_err();
        assert_eq!(err, ValidationError::IdsExhausted { entity: "note" });
        assert_eq!(s.len(), 4);
        assert_eq!(ids(&s.search("")), vec![1, 2, 3, u32::MAX]);
    }

    #[test]
    fn test_add_invalid_draft_is_rejected() {
        let s = store();
        let err = s
            .added(NoteDraft { title: " ".into() }, today())
            .unwrap_err();
        assert_eq!(err, ValidationError::missing("note", "title"));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_replaced_keeps_position() {
        let s = store().replaced(note(2, "Beta 2", "blue"));
        assert_eq!(ids(&s.search("")), vec![1, 2, 3]);
        assert_eq!(s.get(&2).unwrap().title, "Beta 2");
    }

    #[test]
    fn test_removed_and_count() {
        let s = store().removed(&2);
        assert_eq!(s.len(), 2);
        assert!(!s.contains(&2));
        assert_eq!(s.count_where(|n| n.tag.eq_ignore_ascii_case("red")), 2);
    }
}
