//! Sidebar with the main navigation and the signed-in profile

use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const MENU_ITEMS: [MenuItem; 7] = [
    MenuItem { path: "/", label: "Dashboard", icon: "dashboard" },
    MenuItem { path: "/services", label: "Services & Rentals", icon: "monitor" },
    MenuItem { path: "/event-planning", label: "Event Planning", icon: "clipboard" },
    MenuItem { path: "/events-hosted", label: "Events Hosted", icon: "party" },
    MenuItem { path: "/orders", label: "Orders & Invoices", icon: "file-check" },
    MenuItem { path: "/content", label: "Section Content", icon: "layout" },
    MenuItem { path: "/settings", label: "Settings", icon: "settings" },
];

/// Whether the menu entry for `item_path` is highlighted at `current_path`
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    if item_path == "/" {
        return current_path == "/";
    }
    current_path == item_path
        || current_path
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (auth_state, _) = use_auth();

    view! {
        <div class="app-sidebar__brand">
            <span class="app-sidebar__logo">{AppConfig::BRAND}</span>
            <span class="app-sidebar__tagline">{AppConfig::SUBTITLE}</span>
        </div>

        <nav class="app-sidebar__content">
            {MENU_ITEMS.into_iter().map(|item| {
                let active = move || pathname.with(|p| is_active(item.path, p));
                view! {
                    <A href=item.path attr:class="app-sidebar__item-link">
                        <div class="app-sidebar__item" class:app-sidebar__item--active=active>
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span class="app-sidebar__label">{item.label}</span>
                            </div>
                        </div>
                    </A>
                }
            }).collect_view()}
        </nav>

        <div class="app-sidebar__footer">
            <div class="app-sidebar__avatar">
                {move || auth_state.with(|s| s.user.initials())}
            </div>
            <div class="app-sidebar__profile">
                <div class="app-sidebar__profile-name">
                    {move || auth_state.with(|s| s.user.full_name.clone())}
                </div>
                <div class="app-sidebar__profile-email">
                    {move || auth_state.with(|s| s.user.email.clone())}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_only_active_at_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/services"));
    }

    #[test]
    fn test_nested_paths() {
        assert!(is_active("/orders", "/orders"));
        assert!(is_active("/orders", "/orders/3"));
        assert!(!is_active("/events", "/events-hosted"));
    }

    #[test]
    fn test_menu_paths_are_unique() {
        let mut paths: Vec<&str> = MENU_ITEMS.iter().map(|i| i.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), MENU_ITEMS.len());
    }
}
