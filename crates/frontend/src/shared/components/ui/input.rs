use leptos::prelude::*;

/// Labelled text input; a required field gets an asterisk after its label
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "password", "email", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                autocomplete=move || autocomplete.get().unwrap_or_default()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
