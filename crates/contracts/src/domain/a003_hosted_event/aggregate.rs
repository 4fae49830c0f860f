use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::draft::require;
use crate::domain::common::{
    Draft, EntityStore, Flag, Flagged, Record, ValidationError, PLACEHOLDER_IMAGE,
};
use crate::shared::date::ymd;
use crate::shared::list::{compare_text, Sortable};

// ============================================================================
// Event type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventType {
    #[default]
    Wedding,
    Corporate,
    Social,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Wedding, EventType::Corporate, EventType::Social];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::Corporate => "Corporate",
            EventType::Social => "Social",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

// ============================================================================
// Record
// ============================================================================

/// A past event shown in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedEvent {
    pub id: u32,
    pub title: String,
    /// Free-text event date as entered by the user
    pub date: String,
    pub event_type: EventType,
    pub image_count: u32,
    pub image: String,
    pub description: String,
    pub status: bool,
    pub featured: bool,
    pub slider: bool,
    pub updated: NaiveDate,
}

impl Record for HostedEvent {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.title, self.event_type.as_str()]
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "hosted_event"
    }

    fn element_name() -> &'static str {
        "Event"
    }

    fn list_name() -> &'static str {
        "Events Hosted"
    }
}

impl Flagged for HostedEvent {
    fn flag(&self, flag: Flag) -> Option<bool> {
        Some(match flag {
            Flag::Status => self.status,
            Flag::Featured => self.featured,
            Flag::Slider => self.slider,
        })
    }

    fn flag_mut(&mut self, flag: Flag) -> Option<&mut bool> {
        Some(match flag {
            Flag::Status => &mut self.status,
            Flag::Featured => &mut self.featured,
            Flag::Slider => &mut self.slider,
        })
    }
}

impl Sortable for HostedEvent {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => compare_text(&self.title, &other.title),
            // free text, so the best we can do is lexical
            "date" => compare_text(&self.date, &other.date),
            "type" => self.event_type.as_str().cmp(other.event_type.as_str()),
            "status" => self.status.cmp(&other.status),
            "updated" => self.updated.cmp(&other.updated),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedEventDraft {
    pub title: String,
    pub date: String,
    pub event_type: EventType,
    pub description: String,
    pub status: bool,
}

impl Default for HostedEventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            event_type: EventType::Wedding,
            description: String::new(),
            status: true,
        }
    }
}

impl Draft<HostedEvent> for HostedEventDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "event", "title")?;
        require(&self.date, "event", "event date")
    }

    fn into_record(self, id: u32, today: NaiveDate) -> HostedEvent {
        HostedEvent {
            id,
            title: self.title.trim().to_string(),
            date: self.date,
            event_type: self.event_type,
            image_count: 0,
            image: PLACEHOLDER_IMAGE.to_string(),
            description: self.description,
            status: self.status,
            featured: false,
            slider: false,
            updated: today,
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventStats {
    pub total: usize,
    pub active: usize,
    pub featured: usize,
    /// Images contributed to the slider by slider-enabled events
    pub slider_images: u32,
}

impl EventStats {
    pub fn collect(store: &EntityStore<HostedEvent>) -> Self {
        Self {
            total: store.len(),
            active: store.count_where(|e| e.status),
            featured: store.count_where(|e| e.featured),
            slider_images: store
                .iter()
                .filter(|e| e.slider)
                .map(|e| e.image_count)
                .sum(),
        }
    }
}

// ============================================================================
// Seed data
// ============================================================================

pub fn seed() -> Vec<HostedEvent> {
    vec![
        HostedEvent {
            id: 1,
            title: "Johnson Wedding".into(),
            date: "May 15, 2023".into(),
            event_type: EventType::Wedding,
            image_count: 2,
            image: "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?auto=format&fit=crop&w=100&q=80".into(),
            description: String::new(),
            status: true,
            featured: true,
            slider: true,
            updated: ymd(2023, 5, 20),
        },
        HostedEvent {
            id: 2,
            title: "Tech Corp Annual Gala".into(),
            date: "Jul 10, 2023".into(),
            event_type: EventType::Corporate,
            image_count: 1,
            image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?auto=format&fit=crop&w=100&q=80".into(),
            description: String::new(),
            status: true,
            featured: true,
            slider: true,
            updated: ymd(2023, 7, 15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_required() {
        let store = EntityStore::new(seed());
        let draft = HostedEventDraft {
            title: "Garden Party".into(),
            ..Default::default()
        };
        assert_eq!(
            store.added(draft, ymd(2024, 1, 1)).unwrap_err(),
            ValidationError::missing("event", "event date")
        );
    }

    #[test]
    fn test_add_event_starts_without_images() {
        let store = EntityStore::new(seed());
        let draft = HostedEventDraft {
            title: "Garden Party".into(),
            date: "2024-06-01".into(),
            event_type: EventType::Social,
            ..Default::default()
        };
        let (store, id) = store.added(draft, ymd(2024, 1, 1)).unwrap();
        let event = store.get(&id).unwrap();
        assert_eq!(id, 3);
        assert_eq!(event.image_count, 0);
        assert_eq!(event.event_type, EventType::Social);
    }

    #[test]
    fn test_slider_images_sum_image_counts() {
        let store = EntityStore::new(seed());
        assert_eq!(EventStats::collect(&store).slider_images, 3);

        let store = store.toggled(&1, Flag::Slider);
        assert_eq!(EventStats::collect(&store).slider_images, 1);
    }

    #[test]
    fn test_search_by_type() {
        let store = EntityStore::new(seed());
        let found = store.search("corporate");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }
}
