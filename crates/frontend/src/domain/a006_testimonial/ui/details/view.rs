use std::sync::Arc;

use contracts::domain::a006_testimonial::{TestimonialDraft, EVENT_TYPES};
use contracts::domain::common::Draft;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::components::star_rating::StarRating;
use crate::shared::components::ui::{Button, Checkbox, Input, Select, Textarea};
use crate::shared::form::FormViewModel;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

fn event_type_options() -> Vec<(String, String)> {
    EVENT_TYPES
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

#[component]
pub fn TestimonialDetails(
    on_saved: Callback<TestimonialDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FormViewModel::new(TestimonialDraft::default());
    let toasts = use_toast();

    let save = move |_: MouseEvent| vm.save_command(TestimonialDraft::validate, toasts, on_saved);
    let rating = Signal::derive(move || vm.form.with(|d| d.rating));

    view! {
        <Modal
            title="Add New Testimonial"
            description="Add a client review to display on the website"
            on_close=on_cancel
            footer=Arc::new(move || view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button on_click=Callback::new(save)>"Save"</Button>
            }.into_any())
        >
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <div class="form__grid">
                <Input
                    label="Client Name"
                    id="testimonial-client"
                    required=true
                    value=vm.text(|d| d.client.clone())
                    on_input=vm.setter(|d, v| d.client = v)
                />
                <Input
                    label="Location / Position"
                    id="testimonial-location"
                    placeholder="e.g., Boston, MA"
                    value=vm.text(|d| d.location.clone())
                    on_input=vm.setter(|d, v| d.location = v)
                />
            </div>
            <Select
                label="Event Type"
                id="testimonial-event-type"
                value=vm.text(|d| d.event_type.clone())
                on_change=vm.setter(|d, v| d.event_type = v)
                options=event_type_options()
            />
            <Textarea
                label="Testimonial"
                id="testimonial-preview"
                required=true
                rows=4
                value=vm.text(|d| d.preview.clone())
                on_input=vm.setter(|d, v| d.preview = v)
            />
            <div class="form__group">
                <span class="form__label">"Rating"</span>
                <div class="star-rating">
                    <StarRating rating=rating on_select=vm.setter(|d, v| d.rating = v) />
                </div>
            </div>
            <Checkbox
                label="Featured"
                id="testimonial-featured"
                checked=vm.flag(|d| d.featured)
                on_change=vm.setter(|d, v| d.featured = v)
            />
            <Checkbox
                label="Active"
                id="testimonial-active"
                checked=vm.flag(|d| d.status)
                on_change=vm.setter(|d, v| d.status = v)
            />
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_event_label() {
        let options = event_type_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[3], ("Social".to_string(), "Social Event".to_string()));
    }
}
