use contracts::system::settings::{PasswordForm, ProfileForm, SettingsTab};
use leptos::prelude::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::tab_bar::TabBar;
use crate::shared::components::ui::{Button, Input};
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_auth;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let active = RwSignal::new(SettingsTab::default().label());
    let labels: Vec<&'static str> = SettingsTab::ALL.iter().map(SettingsTab::label).collect();

    view! {
        <div class="page">
            <PageHeader title="Settings" subtitle="Manage your account and system settings">
                ""
            </PageHeader>
            <TabBar labels=labels active=active />
            {move || match SettingsTab::from_label(active.get()) {
                SettingsTab::Appearance => view! {
                    <ComingSoon title="Appearance Settings" text="Appearance settings will be available soon." />
                }.into_any(),
                SettingsTab::Notifications => view! {
                    <ComingSoon title="Notification Preferences" text="Notification settings will be available soon." />
                }.into_any(),
                SettingsTab::Account => view! {
                    <ProfileCard />
                    <PasswordCard />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let toasts = use_toast();
    let form = RwSignal::new(auth_state.with_untracked(|s| ProfileForm::from(&s.user)));

    let save = move |_| {
        let user = auth_state.with_untracked(|s| s.user.clone());
        match form.with_untracked(|f| f.apply_to(&user)) {
            Ok(updated) => {
                log::info!("profile updated: {}", updated.email);
                set_auth_state.update(|s| s.user = updated);
                toasts.info(
                    "Profile Updated",
                    "Your profile information has been saved successfully.",
                );
            }
            Err(e) => {
                log::warn!("profile rejected: {}", e);
                toasts.error("Error", &e.to_string());
            }
        }
    };

    view! {
        <section class="card">
            <h2 class="card__title">"Profile Information"</h2>
            <p class="card__subtitle">"Update your account information"</p>
            <div class="form__grid">
                <Input
                    label="Name"
                    id="profile-name"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                />
                <Input
                    label="Email"
                    id="profile-email"
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.email = v))
                />
            </div>
            <div class="card__actions">
                <Button icon_name="check" on_click=Callback::new(save)>"Save Changes"</Button>
            </div>
        </section>
    }
}

#[component]
fn PasswordCard() -> impl IntoView {
    let toasts = use_toast();
    let form = RwSignal::new(PasswordForm::default());

    let update = move |_| match form.with_untracked(PasswordForm::submit) {
        Ok(cleared) => {
            log::info!("password updated");
            form.set(cleared);
            toasts.info("Password Updated", "Your password has been updated successfully.");
        }
        Err(e) => {
            log::warn!("password update rejected: {}", e);
            toasts.error("Error", &e.to_string());
        }
    };

    view! {
        <section class="card">
            <h2 class="card__title">"Password"</h2>
            <p class="card__subtitle">"Change your password"</p>
            <div class="form__grid">
                <Input
                    label="Current Password"
                    id="current-password"
                    input_type="password"
                    autocomplete="current-password"
                    value=Signal::derive(move || form.with(|f| f.current_password.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.current_password = v))
                />
                <Input
                    label="New Password"
                    id="new-password"
                    input_type="password"
                    autocomplete="new-password"
                    value=Signal::derive(move || form.with(|f| f.new_password.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.new_password = v))
                />
            </div>
            <div class="card__actions">
                <Button on_click=Callback::new(update)>"Update Password"</Button>
            </div>
        </section>
    }
}

#[component]
fn ComingSoon(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card__title">{title}</h2>
            <p class="card__subtitle">{text}</p>
        </section>
    }
}
