//! List helpers shared by entity pages (search box, highlighting, sort headers)

use leptos::ev::MouseEvent;
use leptos::prelude::*;

pub use contracts::shared::list::{sort_list, Sortable};

/// Number of chars of `chars[from..]` whose lowercase form spells `needle`
fn match_len(chars: &[(usize, char)], from: usize, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    let mut next = from;
    while matched < needle.len() {
        let (_, c) = *chars.get(next)?;
        for lower in c.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        next += 1;
    }
    Some(next - from)
}

/// Split `text` into (fragment, is_match) parts for a case-insensitive `term`.
///
/// Matching walks the chars of `text` itself, so fragments always start and
/// end on char boundaries whatever lowercasing does to byte lengths.
pub fn split_matches(text: &str, term: &str) -> Vec<(String, bool)> {
    let needle: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |(b, _)| *b);

    let mut parts = Vec::new();
    let mut plain_from = 0;
    let mut i = 0;
    while i < chars.len() {
        match match_len(&chars, i, &needle) {
            Some(len) => {
                if i > plain_from {
                    parts.push((text[byte_at(plain_from)..byte_at(i)].to_string(), false));
                }
                parts.push((text[byte_at(i)..byte_at(i + len)].to_string(), true));
                i += len;
                plain_from = i;
            }
            None => i += 1,
        }
    }
    if plain_from < chars.len() || parts.is_empty() {
        parts.push((text[byte_at(plain_from)..].to_string(), false));
    }
    parts
}

/// Highlight search matches in a table cell
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    split_matches(text, term)
        .into_iter()
        .map(|(part, is_match)| {
            if is_match {
                view! { <mark class="search-match">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Search box with a clear button; every keystroke is forwarded
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Active/inactive secondary filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }

    /// Unknown values fall back to `All`
    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .unwrap_or_default()
    }

    pub fn matches(&self, active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => active,
            StatusFilter::Inactive => !active,
        }
    }

    pub fn options() -> Vec<(String, String)> {
        Self::ALL
            .iter()
            .map(|f| (f.as_str().to_string(), f.as_str().to_string()))
            .collect()
    }
}

/// Sort indicator for a header cell
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Header click handler: same field flips direction, another field sorts ascending
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    }
}

/// Sortable table header cell
#[component]
pub fn SortHeader(
    label: &'static str,
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            on:click=create_sort_toggle(field, sort_field, sort_ascending)
        >
            {label}
            <span class="table__sort-indicator">
                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </span>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(parts: &[(String, bool)]) -> Vec<&str> {
        parts
            .iter()
            .filter(|(_, m)| *m)
            .map(|(p, _)| p.as_str())
            .collect()
    }

    #[test]
    fn test_split_matches_case_insensitive() {
        let parts = split_matches("Sound System Rental", "s");
        assert_eq!(marked(&parts), vec!["S", "S", "s"]);
        let joined: String = parts.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(joined, "Sound System Rental");
    }

    #[test]
    fn test_split_matches_keeps_spaces_in_term() {
        let parts = split_matches("Sound System Rental", "m r");
        assert_eq!(marked(&parts), vec!["m R"]);
        assert_eq!(
            split_matches("Rental", "rental "),
            vec![("Rental".to_string(), false)]
        );
    }

    #[test]
    fn test_split_matches_when_lowercase_changes_byte_lengths() {
        // 'Ⱥ' grows and 'ẞ' shrinks when lowercased
        let parts = split_matches("\u{23A}a\u{1E9E}", "a");
        assert_eq!(
            parts,
            vec![
                ("\u{23A}".to_string(), false),
                ("a".to_string(), true),
                ("\u{1E9E}".to_string(), false),
            ]
        );
        let parts = split_matches("Ⱥpfel Ⱥ", "ⱥ");
        assert_eq!(marked(&parts), vec!["Ⱥ", "Ⱥ"]);
        let joined: String = parts.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(joined, "Ⱥpfel Ⱥ");
    }

    #[test]
    fn test_split_matches_empty_text() {
        assert_eq!(split_matches("", "a"), vec![(String::new(), false)]);
    }

    #[test]
    fn test_split_matches_no_term() {
        assert_eq!(
            split_matches("Catering", ""),
            vec![("Catering".to_string(), false)]
        );
        assert_eq!(
            split_matches("Catering", "  "),
            vec![("Catering".to_string(), false)]
        );
        assert_eq!(
            split_matches("Catering", "xyz"),
            vec![("Catering".to_string(), false)]
        );
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::All.matches(false));
        assert!(StatusFilter::Active.matches(true));
        assert!(!StatusFilter::Active.matches(false));
        assert!(StatusFilter::Inactive.matches(false));
        assert_eq!(StatusFilter::parse("Inactive"), StatusFilter::Inactive);
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("title", "title", true), " ▲");
        assert_eq!(get_sort_indicator("title", "title", false), " ▼");
        assert_eq!(get_sort_indicator("title", "status", true), " ⇅");
    }
}
