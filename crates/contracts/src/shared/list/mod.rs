//! Sorting helpers shared by list pages

use std::cmp::Ordering;

/// Types that can be ordered by a named column
pub trait Sortable {
    /// Compare two records by `field`; unknown fields compare equal
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

impl<T: Sortable> Sortable for std::sync::Arc<T> {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        T::compare_by_field(self, other, field)
    }
}

/// Stable sort of `items` by `field`
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive text comparison used by name/title columns
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        rank: u32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => compare_text(self.name, other.name),
                "rank" => self.rank.cmp(&other.rank),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "beta", rank: 2 },
            Row { name: "Alpha", rank: 2 },
            Row { name: "gamma", rank: 1 },
        ]
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_sort_is_stable_and_reversible() {
        let mut items = rows();
        sort_list(&mut items, "rank", true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["gamma", "beta", "Alpha"]);

        sort_list(&mut items, "rank", false);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["beta", "Alpha", "gamma"]);
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let mut items = rows();
        sort_list(&mut items, "nope", true);
        assert_eq!(items, rows());
    }
}
