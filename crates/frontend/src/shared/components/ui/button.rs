use crate::shared::icons::icon;
use leptos::prelude::*;

/// Button with variants ("primary" default, "secondary", "ghost", "danger")
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    /// "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Leading icon name
    #[prop(optional, into)]
    icon_name: Option<String>,
    #[prop(optional, into)] button_type: MaybeProp<String>,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    };
    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=move || format!("button {} {}", variant_class(), size_class())
            title=move || title.get().unwrap_or_default()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {icon_name.map(|name| icon(&name))}
            {children()}
        </button>
    }
}
