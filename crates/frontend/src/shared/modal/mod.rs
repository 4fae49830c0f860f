use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Dialog over a dimmed overlay; closes on Escape, overlay click or the X button
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: MaybeProp<String>,
    on_close: Callback<()>,
    /// Footer buttons (Cancel, Save...)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {move || description.get().map(|d| view! {
                            <p class="modal-description">{d}</p>
                        })}
                    </div>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! {
                    <div class="modal-footer">{footer()}</div>
                })}
            </div>
        </div>
    }
}
