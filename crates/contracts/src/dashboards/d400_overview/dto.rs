use serde::{Deserialize, Serialize};

use crate::domain::a001_service::Service;
use crate::domain::a002_planning_item::PlanningItem;
use crate::domain::a003_hosted_event::HostedEvent;
use crate::domain::a004_order::{Order, OrderStatus};
use crate::domain::a006_testimonial::Testimonial;
use crate::domain::a007_content_section::ContentSection;
use crate::domain::{
    a001_service, a002_planning_item, a003_hosted_event, a004_order, a006_testimonial,
    a007_content_section,
};

/// One "count + link" card of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewTile {
    pub count: usize,
    pub label: String,
    /// Route of the list page behind the card
    pub route: String,
}

/// Dashboard overview: section counts, activity feed and upcoming orders
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overview {
    pub tiles: Vec<OverviewTile>,
    pub recent_activity: Vec<String>,
    pub upcoming: Vec<String>,
}

impl Overview {
    /// Pages own their data, so the overview reads the seed collections
    pub fn from_seeds() -> Self {
        Self::collect(
            &a001_service::seed(),
            &a002_planning_item::seed(),
            &a003_hosted_event::seed(),
            &a004_order::seed(),
            &a007_content_section::seed(),
            &a006_testimonial::seed(),
        )
    }

    pub fn collect(
        services: &[Service],
        planning: &[PlanningItem],
        events: &[HostedEvent],
        orders: &[Order],
        sections: &[ContentSection],
        testimonials: &[Testimonial],
    ) -> Self {
        let tile = |count: usize, label: &str, route: &str| OverviewTile {
            count,
            label: label.to_string(),
            route: route.to_string(),
        };

        let tiles = vec![
            tile(services.len(), "Available items", "/services"),
            tile(planning.len(), "Planning items", "/event-planning"),
            tile(events.len(), "Past events", "/events-hosted"),
            tile(orders.len(), "Pending & completed", "/orders"),
            tile(sections.len(), "Website sections", "/content"),
            tile(testimonials.len(), "Client reviews", "/testimonials"),
        ];

        let mut recent_activity = Vec::new();
        if let Some(service) = services.iter().max_by_key(|s| s.id) {
            recent_activity.push(format!("New Service Added: {}", service.title));
        }
        if let Some(order) = orders.iter().find(|o| o.status != OrderStatus::Pending) {
            recent_activity.push(format!(
                "Order Status Updated: {} - {}",
                order.customer,
                order.status.as_str()
            ));
        }
        if let Some(event) = events.iter().max_by_key(|e| e.id) {
            recent_activity.push(format!("Event Created: {}", event.title));
        }

        let upcoming = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(Order::upcoming_summary)
            .collect();

        Self {
            tiles,
            recent_activity,
            upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let overview = Overview::from_seeds();
        let counts: Vec<usize> = overview.tiles.iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![3, 2, 2, 2, 2, 2]);
        assert_eq!(overview.tiles[0].route, "/services");
        assert_eq!(overview.tiles[5].label, "Client reviews");
    }

    #[test]
    fn test_upcoming_skips_cancelled() {
        let mut orders = a004_order::seed();
        orders[1].status = OrderStatus::Cancelled;
        let overview = Overview::collect(&[], &[], &[], &orders, &[], &[]);
        assert_eq!(
            overview.upcoming,
            vec!["Sep 20, 2023: Alice Johnson - Wedding Photography".to_string()]
        );
    }

    #[test]
    fn test_activity_from_seeds() {
        let overview = Overview::from_seeds();
        assert_eq!(
            overview.recent_activity.last().map(String::as_str),
            Some("Event Created: Tech Corp Annual Gala")
        );
        assert_eq!(
            overview.recent_activity[0],
            "New Service Added: Sound System Rental"
        );
        assert!(overview
            .recent_activity
            .contains(&"Order Status Updated: Alice Johnson - Confirmed".to_string()));
    }

    #[test]
    fn test_empty_collections() {
        let overview = Overview::collect(&[], &[], &[], &[], &[], &[]);
        assert!(overview.recent_activity.is_empty());
        assert!(overview.upcoming.is_empty());
        assert!(overview.tiles.iter().all(|t| t.count == 0));
    }
}
