use std::sync::Arc;

use contracts::domain::a002_planning_item::PlanningItemDraft;
use contracts::domain::common::Draft;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Checkbox, Input, Textarea};
use crate::shared::form::FormViewModel;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

/// "Add Planning Item" dialog
#[component]
pub fn PlanningItemDetails(
    on_saved: Callback<PlanningItemDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FormViewModel::new(PlanningItemDraft::default());
    let toasts = use_toast();

    let save = move |_: MouseEvent| vm.save_command(PlanningItemDraft::validate, toasts, on_saved);

    view! {
        <Modal
            title="Add Planning Item"
            description="Add a new vendor or service for event planning"
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
                label="Name"
                id="planning-name"
                required=true
                value=vm.text(|d| d.name.clone())
                on_input=vm.setter(|d, v| d.name = v)
            />
            <div class="form__grid">
                <Input
                    label="Vendor"
                    id="planning-vendor"
                    value=vm.text(|d| d.vendor.clone())
                    on_input=vm.setter(|d, v| d.vendor = v)
                />
                <Input
                    label="Vendor Contact"
                    id="planning-contact"
                    placeholder="Phone or email"
                    value=vm.text(|d| d.vendor_contact.clone())
                    on_input=vm.setter(|d, v| d.vendor_contact = v)
                />
            </div>
            <Input
                label="Pricing"
                id="planning-pricing"
                placeholder="e.g., $25-$75 per person"
                value=vm.text(|d| d.pricing.clone())
                on_input=vm.setter(|d, v| d.pricing = v)
            />
            <Textarea
                label="Description"
                id="planning-description"
                value=vm.text(|d| d.description.clone())
                on_input=vm.setter(|d, v| d.description = v)
            />
            <Checkbox
                label="Active"
                id="planning-active"
                checked=vm.flag(|d| d.status)
                on_change=vm.setter(|d, v| d.status = v)
            />
        </Modal>
    }
}
