use std::sync::Arc;

use contracts::domain::a003_hosted_event::{EventType, HostedEventDraft};
use contracts::domain::common::Draft;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::components::ui::select::options_of;
use crate::shared::components::ui::{Button, Checkbox, Input, Select, Textarea};
use crate::shared::form::FormViewModel;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

#[component]
pub fn HostedEventDetails(
    on_saved: Callback<HostedEventDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FormViewModel::new(HostedEventDraft::default());
    let toasts = use_toast();

    let save = move |_: MouseEvent| vm.save_command(HostedEventDraft::validate, toasts, on_saved);

    view! {
        <Modal
            title="Add New Event"
            description="Record an event you have hosted"
            on_close=on_cancel
            footer=Arc::new(move || view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button on_click=Callback::new(save)>"Save"</Button>
            }.into_any())
        >
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Input
                label="Event Title"
                id="event-title"
                required=true
                value=vm.text(|d| d.title.clone())
                on_input=vm.setter(|d, v| d.title = v)
            />
            <div class="form__grid">
                // Free text, kept as typed
                <Input
                    label="Event Date"
                    id="event-date"
                    required=true
                    placeholder="e.g., May 15, 2023"
                    value=vm.text(|d| d.date.clone())
                    on_input=vm.setter(|d, v| d.date = v)
                />
                <Select
                    label="Event Type"
                    id="event-type"
                    value=vm.text(|d| d.event_type.as_str().to_string())
                    on_change=vm.setter(|d: &mut HostedEventDraft, v: String| {
                        d.event_type = EventType::parse(&v).unwrap_or_default();
                    })
                    options=options_of(EventType::ALL.iter().map(EventType::as_str))
                />
            </div>
            <Textarea
                label="Description"
                id="event-description"
                value=vm.text(|d| d.description.clone())
                on_input=vm.setter(|d, v| d.description = v)
            />
            <Checkbox
                label="Active"
                id="event-active"
                checked=vm.flag(|d| d.status)
                on_change=vm.setter(|d, v| d.status = v)
            />
        </Modal>
    }
}
