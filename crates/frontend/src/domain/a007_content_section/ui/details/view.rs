use std::sync::Arc;

use contracts::domain::a007_content_section::{ContentSection, ContentSectionDraft};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::form::FormViewModel;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

/// Edit dialog for one website section
#[component]
pub fn ContentSectionDetails(
    section: Arc<ContentSection>,
    on_saved: Callback<ContentSectionDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FormViewModel::new(ContentSectionDraft::from(section.as_ref()));
    let toasts = use_toast();

    let save = move |_: MouseEvent| vm.save_command(ContentSectionDraft::validate, toasts, on_saved);

    view! {
        <Modal
            title=format!("Edit {}", section.title)
            description="Update the content shown in this section of the website"
            on_close=on_cancel
            footer=Arc::new(move || view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button on_click=Callback::new(save)>"Save Changes"</Button>
            }.into_any())
        >
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Input
                label="Title"
                id="section-title"
                required=true
                value=vm.text(|d| d.title.clone())
                on_input=vm.setter(|d, v| d.title = v)
            />
            <Input
                label="Subtitle"
                id="section-subtitle"
                value=vm.text(|d| d.subtitle.clone())
                on_input=vm.setter(|d, v| d.subtitle = v)
            />
            <Textarea
                label="Content"
                id="section-body"
                rows=6
                value=vm.text(|d| d.body.clone())
                on_input=vm.setter(|d, v| d.body = v)
            />
        </Modal>
    }
}
