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
// Category
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[default]
    Service,
    Rental,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 2] = [ServiceCategory::Service, ServiceCategory::Rental];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Service => "Service",
            ServiceCategory::Rental => "Rental",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

// ============================================================================
// Record
// ============================================================================

/// A service or rental offered to customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub price: String,
    pub image: String,
    pub category: ServiceCategory,
    pub description: String,
    pub status: bool,
    pub featured: bool,
    pub slider: bool,
    pub updated: NaiveDate,
}

impl Record for Service {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.title, self.category.as_str()]
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "service"
    }

    fn element_name() -> &'static str {
        "Service"
    }

    fn list_name() -> &'static str {
        "Services & Rentals"
    }
}

impl Flagged for Service {
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

impl Sortable for Service {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => compare_text(&self.title, &other.title),
            "category" => self.category.as_str().cmp(other.category.as_str()),
            "status" => self.status.cmp(&other.status),
            "updated" => self.updated.cmp(&other.updated),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Form state of the "Add New Service/Rental" dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub title: String,
    pub price: String,
    pub category: ServiceCategory,
    pub description: String,
    pub status: bool,
    pub featured: bool,
    pub slider: bool,
}

impl Default for ServiceDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: String::new(),
            category: ServiceCategory::Service,
            description: String::new(),
            status: true,
            featured: false,
            slider: false,
        }
    }
}

impl Draft<Service> for ServiceDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "service/rental item", "title")
    }

    fn into_record(self, id: u32, today: NaiveDate) -> Service {
        Service {
            id,
            title: self.title.trim().to_string(),
            price: self.price,
            image: PLACEHOLDER_IMAGE.to_string(),
            category: self.category,
            description: self.description,
            status: self.status,
            featured: self.featured,
            slider: self.slider,
            updated: today,
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceStats {
    pub total: usize,
    pub services: usize,
    pub rentals: usize,
    pub active: usize,
    pub active_services: usize,
    pub active_rentals: usize,
    pub featured: usize,
    pub slider: usize,
}

impl ServiceStats {
    pub fn collect(store: &EntityStore<Service>) -> Self {
        let is = |c: ServiceCategory| move |s: &Service| s.category == c;
        Self {
            total: store.len(),
            services: store.count_where(is(ServiceCategory::Service)),
            rentals: store.count_where(is(ServiceCategory::Rental)),
            active: store.count_where(|s| s.status),
            active_services: store
                .count_where(|s| s.status && s.category == ServiceCategory::Service),
            active_rentals: store.count_where(|s| s.status && s.category == ServiceCategory::Rental),
            featured: store.count_where(|s| s.featured),
            slider: store.count_where(|s| s.slider),
        }
    }
}

// ============================================================================
// Seed data
// ============================================================================

pub fn seed() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            title: "Event Coordination".into(),
            price: "$1000-$5000".into(),
            image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?auto=format&fit=crop&w=100&q=80".into(),
            category: ServiceCategory::Service,
            description: String::new(),
            status: true,
            featured: true,
            slider: true,
            updated: ymd(2023, 6, 15),
        },
        Service {
            id: 2,
            title: "Photography Service".into(),
            price: "$500-$1500".into(),
            image: "https://images.unsplash.com/photo-1519741497674-611481863552?auto=format&fit=crop&w=100&q=80".into(),
            category: ServiceCategory::Service,
            description: String::new(),
            status: true,
            featured: true,
            slider: true,
            updated: ymd(2023, 5, 10),
        },
        Service {
            id: 3,
            title: "Sound System Rental".into(),
            price: "$300/day".into(),
            image: "https://images.unsplash.com/photo-1520170350707-b2da59970118?auto=format&fit=crop&w=100&q=80".into(),
            category: ServiceCategory::Rental,
            description: String::new(),
            status: true,
            featured: true,
            slider: false,
            updated: ymd(2023, 7, 20),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        ymd(2024, 3, 1)
    }

    #[test]
    fn test_adding_dj_service_to_seed() {
        let store = EntityStore::new(seed());
        assert_eq!(store.len(), 3);

        let draft = ServiceDraft {
            title: "DJ Service".into(),
            ..Default::default()
        };
        let (store, id) = store.added(draft, today()).unwrap();

        assert_eq!(id, 4);
        assert_eq!(store.len(), 4);
        let dj = store.get(&4).unwrap();
        assert_eq!(dj.title, "DJ Service");
        assert!(!dj.featured);
        assert!(!dj.slider);
        assert!(dj.status);
        assert_eq!(dj.updated, today());
        assert_eq!(dj.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let store = EntityStore::new(seed());
        let err = store.added(ServiceDraft::default(), today()).unwrap_err();
        assert_eq!(err.title(), "Missing Information");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_search_by_title_or_category() {
        let store = EntityStore::new(seed());
        let ids = |term: &str| store.search(term).iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids("photo"), vec![2]);
        assert_eq!(ids("RENTAL"), vec![3]);
        assert_eq!(ids(""), vec![1, 2, 3]);
    }

    #[test]
    fn test_trailing_space_must_match_literally() {
        let store = EntityStore::new(seed());
        assert!(store.search("rental ").is_empty());
        assert!(store.search("   ").is_empty());
        let ids: Vec<u32> = store.search("system r").iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_stats() {
        let store = EntityStore::new(seed()).toggled(&3, Flag::Status);
        let stats = ServiceStats::collect(&store);
        assert_eq!(stats.total, 3);
        assert_eq!((stats.services, stats.rentals), (2, 1));
        assert_eq!(stats.active, 2);
        assert_eq!((stats.active_services, stats.active_rentals), (2, 0));
        assert_eq!(stats.featured, 3);
        assert_eq!(stats.slider, 2);
    }

    #[test]
    fn test_toggle_slider_leaves_other_fields() {
        let before = EntityStore::new(seed());
        let after = before.toggled(&1, Flag::Slider);
        let (old, new) = (before.get(&1).unwrap(), after.get(&1).unwrap());
        assert!(!new.slider);
        assert_eq!(new.status, old.status);
        assert_eq!(new.featured, old.featured);
        assert_eq!(new.title, old.title);
        assert_eq!(after.get(&2), before.get(&2));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(ServiceCategory::parse("rental"), Some(ServiceCategory::Rental));
        assert_eq!(ServiceCategory::parse("other"), None);
    }

    #[test]
    fn test_serializes_for_api() {
        let json = serde_json::to_value(&seed()[0]).unwrap();
        assert_eq!(json["category"], "Service");
        assert_eq!(json["updated"], "2023-06-15");
    }
}
