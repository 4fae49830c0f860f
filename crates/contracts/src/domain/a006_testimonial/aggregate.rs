use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::draft::require;
use crate::domain::common::{Draft, Flag, Flagged, Record, ValidationError};
use crate::shared::list::{compare_text, Sortable};

pub const MAX_RATING: u8 = 5;

/// Options offered by the add dialog, as (value, label)
pub const EVENT_TYPES: [(&str, &str); 4] = [
    ("Corporate", "Corporate"),
    ("Wedding", "Wedding"),
    ("Birthday", "Birthday"),
    ("Social", "Social Event"),
];

// ============================================================================
// Record
// ============================================================================

/// Client review shown on the public site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u32,
    pub client: String,
    pub location: String,
    pub event_type: String,
    pub preview: String,
    /// 0 means not rated
    pub rating: u8,
    pub featured: bool,
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Record for Testimonial {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.client
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.client, &self.location, &self.event_type, &self.preview]
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "testimonial"
    }

    fn element_name() -> &'static str {
        "Testimonial"
    }

    fn list_name() -> &'static str {
        "Testimonials"
    }
}

impl Flagged for Testimonial {
    fn flag(&self, flag: Flag) -> Option<bool> {
        match flag {
            Flag::Status => Some(self.status),
            Flag::Featured => Some(self.featured),
            Flag::Slider => None,
        }
    }

    fn flag_mut(&mut self, flag: Flag) -> Option<&mut bool> {
        match flag {
            Flag::Status => Some(&mut self.status),
            Flag::Featured => Some(&mut self.featured),
            Flag::Slider => None,
        }
    }
}

impl Sortable for Testimonial {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "client" => compare_text(&self.client, &other.client),
            "event_type" => compare_text(&self.event_type, &other.event_type),
            "rating" => self.rating.cmp(&other.rating),
            "status" => self.status.cmp(&other.status),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDraft {
    pub client: String,
    pub location: String,
    pub event_type: String,
    pub preview: String,
    pub rating: u8,
    pub featured: bool,
    pub status: bool,
}

impl Default for TestimonialDraft {
    fn default() -> Self {
        Self {
            client: String::new(),
            location: String::new(),
            event_type: "Corporate".into(),
            preview: String::new(),
            rating: 0,
            featured: false,
            status: true,
        }
    }
}

impl Draft<Testimonial> for TestimonialDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.client, "testimonial", "client name")?;
        require(&self.preview, "testimonial", "testimonial text")?;
        if self.rating > MAX_RATING {
            return Err(ValidationError::OutOfRange {
                field: "Rating",
                min: 0,
                max: u32::from(MAX_RATING),
            });
        }
        Ok(())
    }

    fn into_record(self, id: u32, _today: NaiveDate) -> Testimonial {
        Testimonial {
            id,
            client: self.client.trim().to_string(),
            location: self.location,
            event_type: self.event_type,
            preview: self.preview,
            rating: self.rating,
            featured: self.featured,
            status: self.status,
            avatar: None,
        }
    }
}

// ============================================================================
// Seed data
// ============================================================================

pub fn seed() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            client: "Sarah Johnson".into(),
            location: "Boston, MA".into(),
            event_type: "Wedding".into(),
            preview: "The team went above and beyond...".into(),
            rating: 5,
            featured: true,
            status: true,
            avatar: Some("https://randomuser.me/api/portraits/women/68.jpg".into()),
        },
        Testimonial {
            id: 2,
            client: "Michael Thompson".into(),
            location: "CEO, Innovate Tech".into(),
            event_type: "Corporate".into(),
            preview: "Our annual company gala was...".into(),
            rating: 4,
            featured: false,
            status: true,
            avatar: Some("https://randomuser.me/api/portraits/men/32.jpg".into()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityStore;
    use crate::shared::date::ymd;

    fn draft(client: &str, preview: &str) -> TestimonialDraft {
        TestimonialDraft {
            client: client.into(),
            preview: preview.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_and_text_required() {
        let store = EntityStore::new(seed());
        let today = ymd(2024, 1, 1);
        assert_eq!(
            store.added(draft("", "Great!"), today).unwrap_err(),
            ValidationError::missing("testimonial", "client name")
        );
        assert_eq!(
            store.added(draft("Dana", "  "), today).unwrap_err(),
            ValidationError::missing("testimonial", "testimonial text")
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_rating_above_five_rejected() {
        let mut d = draft("Dana", "Great!");
        d.rating = 6;
        assert!(matches!(
            d.validate(),
            Err(ValidationError::OutOfRange { max: 5, .. })
        ));
    }

    #[test]
    fn test_add_uses_defaults() {
        let store = EntityStore::new(seed());
        let (store, id) = store
            .added(draft("Dana Lee", "Fantastic party"), ymd(2024, 1, 1))
            .unwrap();
        let added = store.get(&id).unwrap();
        assert_eq!(id, 3);
        assert_eq!(added.event_type, "Corporate");
        assert_eq!(added.rating, 0);
        assert!(added.status);
        assert!(!added.featured);
        assert_eq!(added.avatar, None);
    }

    #[test]
    fn test_slider_flag_not_carried() {
        let store = EntityStore::new(seed());
        let toggled = store.toggled(&1, Flag::Slider);
        assert_eq!(toggled.get(&1), store.get(&1));

        let toggled = store.toggled(&2, Flag::Featured);
        assert!(toggled.get(&2).unwrap().featured);
    }

    #[test]
    fn test_delete() {
        let store = EntityStore::new(seed()).removed(&1);
        assert_eq!(store.len(), 1);
        assert!(store.get(&1).is_none());
    }

    #[test]
    fn test_search_preview_text() {
        let store = EntityStore::new(seed());
        let found = store.search("GALA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].client, "Michael Thompson");
    }
}
