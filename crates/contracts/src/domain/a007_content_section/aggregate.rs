use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::draft::require;
use crate::domain::common::{Record, ValidationError};
use crate::shared::date::ymd;

// ============================================================================
// Record
// ============================================================================

/// Editable block of the public website (hero, about...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub last_updated: NaiveDate,
    pub image: String,
}

impl Record for ContentSection {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.subtitle]
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "content_section"
    }

    fn element_name() -> &'static str {
        "Section"
    }

    fn list_name() -> &'static str {
        "Section Content"
    }
}

// ============================================================================
// Edit form
// ============================================================================

/// Sections are fixed; the dialog only edits existing ones
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSectionDraft {
    pub title: String,
    pub subtitle: String,
    pub body: String,
}

impl From<&ContentSection> for ContentSectionDraft {
    fn from(s: &ContentSection) -> Self {
        Self {
            title: s.title.clone(),
            subtitle: s.subtitle.clone(),
            body: s.body.clone(),
        }
    }
}

impl ContentSectionDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "section", "title")
    }

    /// Copy of `section` with the edited text, stamped with `today`
    pub fn apply_to(
        self,
        section: &ContentSection,
        today: NaiveDate,
    ) -> Result<ContentSection, ValidationError> {
        self.validate()?;
        Ok(ContentSection {
            id: section.id,
            title: self.title.trim().to_string(),
            subtitle: self.subtitle,
            body: self.body,
            last_updated: today,
            image: section.image.clone(),
        })
    }
}

// ============================================================================
// Seed data
// ============================================================================

pub fn seed() -> Vec<ContentSection> {
    vec![
        ContentSection {
            id: 1,
            title: "Hero Section".into(),
            subtitle: "Creating Memorable Events".into(),
            body: "Professional event planning and management services for all occasions.".into(),
            last_updated: ymd(2023, 4, 10),
            image: "https://images.unsplash.com/photo-1476820865390-c52aeebb9891?auto=format&fit=crop&w=300&q=80".into(),
        },
        ContentSection {
            id: 2,
            title: "About Us".into(),
            subtitle: "Our Story".into(),
            body: "With over 10 years of experience, we specialize in creating unique and memorable events tailored to your needs.".into(),
            last_updated: ymd(2023, 4, 12),
            image: "https://images.unsplash.com/photo-1643029714206-0e21ba8fb76f?auto=format&fit=crop&w=300&q=80".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityStore;

    #[test]
    fn test_edit_stamps_date() {
        let store = EntityStore::new(seed());
        let hero = store.get(&1).unwrap();
        let mut draft = ContentSectionDraft::from(hero.as_ref());
        draft.subtitle = "Events You Remember".into();

        let edited = draft.apply_to(hero, ymd(2024, 3, 1)).unwrap();
        let store = store.replaced(edited);

        let hero = store.get(&1).unwrap();
        assert_eq!(hero.subtitle, "Events You Remember");
        assert_eq!(hero.last_updated, ymd(2024, 3, 1));
        assert_eq!(hero.image, seed()[0].image);
    }

    #[test]
    fn test_blank_title_rejected() {
        let section = &seed()[1];
        let draft = ContentSectionDraft {
            title: String::new(),
            ..ContentSectionDraft::from(section)
        };
        assert_eq!(
            draft.apply_to(section, ymd(2024, 3, 1)).unwrap_err(),
            ValidationError::missing("section", "title")
        );
    }

    #[test]
    fn test_search_subtitle() {
        let store = EntityStore::new(seed());
        assert_eq!(store.search("story")[0].id, 2);
    }
}
