use std::sync::Arc;

use contracts::domain::a001_service::{ServiceCategory, ServiceDraft};
use contracts::domain::common::Draft;
use leptos::prelude::*;

use crate::shared::components::tab_bar::TabBar;
use crate::shared::components::ui::select::options_of;
use crate::shared::components::ui::{Button, Checkbox, Input, Select, Textarea};
use crate::shared::form::FormViewModel;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

const TABS: [&str; 3] = ["General", "Images", "Details"];

#[component]
pub fn ServiceDetails(on_saved: Callback<ServiceDraft>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = FormViewModel::new(ServiceDraft::default());
    let toasts = use_toast();
    let active_tab = RwSignal::new(TABS[0]);

    let save = move |_: leptos::ev::MouseEvent| vm.save_command(ServiceDraft::validate, toasts, on_saved);

    view! {
        <Modal
            title="Add New Service/Rental"
            description="Create new service or rental item"
            on_close=on_cancel
            footer=Arc::new(move || view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button on_click=Callback::new(save)>"Save"</Button>
            }.into_any())
        >
            <TabBar labels=TABS.to_vec() active=active_tab />

            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Show when=move || active_tab.get() == "General">
                <div class="form__section">
                    <h3 class="form__section-title">"General Information"</h3>
                    <p class="form__section-hint">"Basic information about the service or rental"</p>
                    <Input
                        label="Title"
                        id="service-title"
                        required=true
                        value=vm.text(|d| d.title.clone())
                        on_input=vm.setter(|d, v| d.title = v)
                    />
                    <Textarea
                        label="Description"
                        id="service-description"
                        value=vm.text(|d| d.description.clone())
                        on_input=vm.setter(|d, v| d.description = v)
                    />
                    <div class="form__grid">
                        <Select
                            label="Category"
                            id="service-category"
                            value=vm.text(|d| d.category.as_str().to_string())
                            on_change=vm.setter(|d: &mut ServiceDraft, v: String| {
                                d.category = ServiceCategory::parse(&v).unwrap_or_default();
                            })
                            options=options_of(ServiceCategory::ALL.iter().map(ServiceCategory::as_str))
                        />
                        <Input
                            label="Pricing (Optional)"
                            id="service-price"
                            placeholder="e.g., $500-$1500"
                            value=vm.text(|d| d.price.clone())
                            on_input=vm.setter(|d, v| d.price = v)
                        />
                    </div>
                    <Checkbox
                        label="Active"
                        id="service-active"
                        checked=vm.flag(|d| d.status)
                        on_change=vm.setter(|d, v| d.status = v)
                    />
                </div>
            </Show>

            <Show when=move || active_tab.get() == "Images">
                <div class="form__section">
                    <h3 class="form__section-title">"Images"</h3>
                    <p class="form__section-hint">
                        "New items get a placeholder image until images are uploaded."
                    </p>
                </div>
            </Show>

            <Show when=move || active_tab.get() == "Details">
                <div class="form__section">
                    <h3 class="form__section-title">"Additional Details"</h3>
                    <p class="form__section-hint">"Choose where the item is promoted"</p>
                    <Checkbox
                        label="Featured"
                        id="service-featured"
                        checked=vm.flag(|d| d.featured)
                        on_change=vm.setter(|d, v| d.featured = v)
                    />
                    <Checkbox
                        label="Show in Slider"
                        id="service-slider"
                        checked=vm.flag(|d| d.slider)
                        on_change=vm.setter(|d, v| d.slider = v)
                    />
                </div>
            </Show>
        </Modal>
    }
}
