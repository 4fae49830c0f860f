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
// Record
// ============================================================================

/// Vendor-provided item used when planning an event (catering, decoration...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningItem {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub vendor: String,
    pub vendor_contact: String,
    pub pricing: String,
    pub description: String,
    pub status: bool,
    pub featured: bool,
    pub slider: bool,
    pub updated: NaiveDate,
}

impl Record for PlanningItem {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.vendor]
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "planning_item"
    }

    fn element_name() -> &'static str {
        "Planning Item"
    }

    fn list_name() -> &'static str {
        "Event Planning"
    }
}

impl Flagged for PlanningItem {
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

impl Sortable for PlanningItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(&self.name, &other.name),
            "vendor" => compare_text(&self.vendor, &other.vendor),
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
pub struct PlanningItemDraft {
    pub name: String,
    pub vendor: String,
    pub vendor_contact: String,
    pub pricing: String,
    pub description: String,
    pub status: bool,
}

impl Default for PlanningItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            vendor: String::new(),
            vendor_contact: String::new(),
            pricing: String::new(),
            description: String::new(),
            status: true,
        }
    }
}

impl Draft<PlanningItem> for PlanningItemDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "planning item", "name")
    }

    fn into_record(self, id: u32, today: NaiveDate) -> PlanningItem {
        PlanningItem {
            id,
            name: self.name.trim().to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            vendor: self.vendor,
            vendor_contact: self.vendor_contact,
            pricing: self.pricing,
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
pub struct PlanningStats {
    pub total: usize,
    pub active: usize,
    pub featured: usize,
    pub slider: usize,
}

impl PlanningStats {
    pub fn collect(store: &EntityStore<PlanningItem>) -> Self {
        Self {
            total: store.len(),
            active: store.count_where(|i| i.status),
            featured: store.count_where(|i| i.featured),
            slider: store.count_where(|i| i.slider),
        }
    }
}

// ============================================================================
// Seed data
// ============================================================================

pub fn seed() -> Vec<PlanningItem> {
    vec![
        PlanningItem {
            id: 1,
            name: "Catering Service".into(),
            image: "https://images.unsplash.com/photo-1555244162-803834f70033?auto=format&fit=crop&w=100&q=80".into(),
            vendor: "Gourmet Delights".into(),
            vendor_contact: String::new(),
            pricing: "$25-$75 per person".into(),
            description: String::new(),
            status: true,
            featured: true,
            slider: true,
            updated: ymd(2023, 6, 15),
        },
        PlanningItem {
            id: 2,
            name: "Venue Decoration".into(),
            image: "https://images.unsplash.com/photo-1519741497674-611481863552?auto=format&fit=crop&w=100&q=80".into(),
            vendor: "Decor Magic".into(),
            vendor_contact: String::new(),
            pricing: "$800-$3000".into(),
            description: String::new(),
            status: true,
            featured: true,
            slider: true,
            updated: ymd(2023, 6, 10),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_vendor() {
        let store = EntityStore::new(seed());
        let found = store.search("magic");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Venue Decoration");
    }

    #[test]
    fn test_add_requires_name() {
        let store = EntityStore::new(seed());
        let draft = PlanningItemDraft {
            vendor: "Bloom & Co".into(),
            ..Default::default()
        };
        assert!(store.added(draft, ymd(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_add_defaults() {
        let store = EntityStore::new(seed());
        let draft = PlanningItemDraft {
            name: "  Florist ".into(),
            status: false,
            ..Default::default()
        };
        let (store, id) = store.added(draft, ymd(2024, 1, 1)).unwrap();
        let item = store.get(&id).unwrap();
        assert_eq!(id, 3);
        assert_eq!(item.name, "Florist");
        assert!(!item.status && !item.featured && !item.slider);
    }

    #[test]
    fn test_stats_follow_toggles() {
        let store = EntityStore::new(seed())
            .toggled(&1, Flag::Featured)
            .toggled(&2, Flag::Status);
        let stats = PlanningStats::collect(&store);
        assert_eq!(
            stats,
            PlanningStats {
                total: 2,
                active: 1,
                featured: 1,
                slider: 2
            }
        );
    }
}
