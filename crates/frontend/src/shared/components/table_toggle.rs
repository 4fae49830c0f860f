use leptos::prelude::*;

/// Switch rendered inside a table cell
///
/// Clicking the switch does not trigger the row click.
///
/// ```rust,ignore
/// <TableToggle
///     checked=Signal::derive(move || item.featured)
///     on_toggle=Callback::new(move |_| toggle(id, Flag::Featured))
/// />
/// ```
#[component]
pub fn TableToggle(
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(optional, into)] title: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--toggle" on:click=|e| e.stop_propagation()>
            <Switch checked=checked on_toggle=on_toggle title=title />
        </td>
    }
}

/// Pill-shaped on/off switch
#[component]
pub fn Switch(
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(optional, into)] title: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            class="switch"
            class:switch--on=move || checked.get()
            aria-checked=move || checked.get().to_string()
            title=move || title.get().unwrap_or_default()
            on:click=move |_| on_toggle.run(())
        >
            <span class="switch__thumb"></span>
        </button>
    }
}

/// Tag badge that toggles a flag; dimmed while the flag is off
#[component]
pub fn TagChip(
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="tag-chip"
            class:tag-chip--on=move || active.get()
            title=move || format!("{} {}", if active.get() { "Remove" } else { "Mark as" }, label)
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle.run(());
            }
        >
            {label}
        </button>
    }
}
