use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::d400_overview::ui::OverviewPage;
use crate::domain::a001_service::ui::list::ServiceList;
use crate::domain::a002_planning_item::ui::list::PlanningItemList;
use crate::domain::a003_hosted_event::ui::list::HostedEventList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a006_testimonial::ui::list::TestimonialList;
use crate::domain::a007_content_section::ui::list::ContentSectionList;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::settings::SettingsPage;

/// Sidebar and header around the matched page, behind the sign-in check
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <Outlet /> }.into_any()
            />
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=OverviewPage />
                    <Route path=path!("services") view=ServiceList />
                    <Route path=path!("event-planning") view=PlanningItemList />
                    <Route path=path!("events-hosted") view=HostedEventList />
                    <Route path=path!("orders") view=OrderList />
                    <Route path=path!("content") view=ContentSectionList />
                    <Route path=path!("testimonials") view=TestimonialList />
                    <Route path=path!("settings") view=SettingsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
