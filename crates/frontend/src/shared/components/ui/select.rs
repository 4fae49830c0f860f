use leptos::prelude::*;

/// Labelled select; options are (value, label) pairs
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>{l}</label>
            })}
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.into_iter().map(|(val, text)| {
                    let val_clone = val.clone();
                    view! {
                        <option value=val selected=move || value.get() == val_clone>
                            {text}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Options from a list of plain labels, value equal to label
pub fn options_of<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    labels
        .into_iter()
        .map(|l| (l.to_string(), l.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_of() {
        assert_eq!(
            options_of(["Service", "Rental"]),
            vec![
                ("Service".to_string(), "Service".to_string()),
                ("Rental".to_string(), "Rental".to_string())
            ]
        );
    }
}
