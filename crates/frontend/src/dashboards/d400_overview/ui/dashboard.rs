use contracts::dashboards::d400_overview::{Overview, OverviewTile};
use leptos::prelude::*;

use crate::layout::left::sidebar::MENU_ITEMS;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;

/// Sidebar icon of the page a tile links to
fn tile_icon(route: &str) -> &'static str {
    // testimonials have no menu entry
    if route == "/testimonials" {
        return "messages";
    }
    MENU_ITEMS
        .iter()
        .find(|item| item.path == route)
        .map_or("dashboard", |item| item.icon)
}

#[component]
fn ListCard(title: &'static str, icon_name: &'static str, lines: Vec<String>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                {icon(icon_name)}
            </div>
            <ul class="activity-list">
                {lines.into_iter().map(|line| view! {
                    <li class="activity-list__item">{line}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let overview = Overview::from_seeds();
    log::debug!("d400_overview: {} tiles", overview.tiles.len());

    view! {
        <div class="page">
            <PageHeader
                title="Dashboard"
                subtitle="Welcome to your event management dashboard. Here's an overview of your business."
            >
                ""
            </PageHeader>

            <div class="stat-grid">
                {overview.tiles.into_iter().map(|OverviewTile { count, label, route }| view! {
                    <StatCard
                        label=label
                        icon_name=tile_icon(&route)
                        value=count.to_string()
                        link=route
                    />
                }).collect_view()}
            </div>

            <div class="dashboard-grid">
                <ListCard title="Recent Activity" icon_name="bell" lines=overview.recent_activity />
                <ListCard title="Upcoming Events" icon_name="party" lines=overview.upcoming />
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Sales Performance"</h3>
                </div>
                <div class="chart-placeholder">"Sales chart will be displayed here"</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_icons_follow_the_menu() {
        for item in MENU_ITEMS {
            assert_eq!(tile_icon(item.path), item.icon, "{}", item.path);
        }
        assert_eq!(tile_icon("/testimonials"), "messages");
        assert_eq!(tile_icon("/unknown"), "dashboard");
    }
}
