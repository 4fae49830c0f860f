use std::sync::Arc;

use contracts::domain::a004_order::{Order, OrderDraft, OrderStatus};
use contracts::domain::common::Draft;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::components::ui::select::options_of;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::form::FormViewModel;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

/// Add or edit dialog; `order` is the record being edited
#[component]
pub fn OrderDetails(
    #[prop(optional)] order: Option<Arc<Order>>,
    on_saved: Callback<OrderDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = order.is_some();
    let initial = order.as_deref().map(OrderDraft::from).unwrap_or_default();
    let vm = FormViewModel::new(initial);
    let toasts = use_toast();

    let save = move |_: MouseEvent| vm.save_command(OrderDraft::validate, toasts, on_saved);

    let (title, description) = if editing {
        ("Edit Order", "Update the order details")
    } else {
        ("Add New Order", "Create a new customer order")
    };

    view! {
        <Modal
            title=title
            description=description
            on_close=on_cancel
            footer=Arc::new(move || view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button on_click=Callback::new(save)>
                    {if editing { "Update" } else { "Save" }}
                </Button>
            }.into_any())
        >
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <div class="form__grid">
                <Input
                    label="Customer Name"
                    id="order-customer"
                    required=true
                    value=vm.text(|d| d.customer.clone())
                    on_input=vm.setter(|d, v| d.customer = v)
                />
                <Input
                    label="Email"
                    id="order-email"
                    input_type="email"
                    required=true
                    value=vm.text(|d| d.email.clone())
                    on_input=vm.setter(|d, v| d.email = v)
                />
            </div>
            <div class="form__grid">
                <Input
                    label="Contact"
                    id="order-contact"
                    value=vm.text(|d| d.contact.clone())
                    on_input=vm.setter(|d, v| d.contact = v)
                />
                <Input
                    label="Event Date"
                    id="order-event-date"
                    required=true
                    placeholder="e.g., Jun 15, 2023"
                    value=vm.text(|d| d.event_date.clone())
                    on_input=vm.setter(|d, v| d.event_date = v)
                />
            </div>
            <div class="form__grid">
                <Input
                    label="Service Type"
                    id="order-service"
                    required=true
                    value=vm.text(|d| d.service.clone())
                    on_input=vm.setter(|d, v| d.service = v)
                />
                <Select
                    label="Status"
                    id="order-status"
                    value=vm.text(|d| d.status.as_str().to_string())
                    on_change=vm.setter(|d: &mut OrderDraft, v: String| {
                        d.status = OrderStatus::parse(&v).unwrap_or_default();
                    })
                    options=options_of(OrderStatus::ALL.iter().map(OrderStatus::as_str))
                />
            </div>
            <Textarea
                label="Notes"
                id="order-notes"
                value=vm.text(|d| d.notes.clone())
                on_input=vm.setter(|d, v| d.notes = v)
            />
        </Modal>
    }
}
