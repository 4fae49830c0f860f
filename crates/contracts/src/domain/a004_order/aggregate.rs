use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::draft::require;
use crate::domain::common::{Draft, Record, ValidationError};
use crate::shared::list::{compare_text, Sortable};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    Confirmed,
    #[default]
    Pending,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Confirmed,
        OrderStatus::Pending,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Pending => "Pending",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Customer booking of a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub email: String,
    pub contact: String,
    /// Free-text event date as entered by the user
    pub event_date: String,
    pub service: String,
    pub status: OrderStatus,
    pub notes: String,
}

impl Order {
    /// Line for the dashboard "Upcoming Events" card
    pub fn upcoming_summary(&self) -> String {
        format!("{}: {} - {}", self.event_date, self.customer, self.service)
    }
}

impl Record for Order {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.customer
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.customer, &self.email, &self.service]
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "customer" => compare_text(&self.customer, &other.customer),
            "event_date" => compare_text(&self.event_date, &other.event_date),
            "service" => compare_text(&self.service, &other.service),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Draft (add and edit dialogs share it)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer: String,
    pub email: String,
    pub contact: String,
    pub event_date: String,
    pub service: String,
    pub status: OrderStatus,
    pub notes: String,
}

impl From<&Order> for OrderDraft {
    fn from(o: &Order) -> Self {
        Self {
            customer: o.customer.clone(),
            email: o.email.clone(),
            contact: o.contact.clone(),
            event_date: o.event_date.clone(),
            service: o.service.clone(),
            status: o.status,
            notes: o.notes.clone(),
        }
    }
}

impl OrderDraft {
    /// Validated copy of an existing order carrying the edited fields
    pub fn apply_to(self, id: u32) -> Result<Order, ValidationError> {
        self.validate()?;
        Ok(self.build(id))
    }

    fn build(self, id: u32) -> Order {
        Order {
            id,
            customer: self.customer.trim().to_string(),
            email: self.email.trim().to_string(),
            contact: self.contact,
            event_date: self.event_date,
            service: self.service,
            status: self.status,
            notes: self.notes,
        }
    }
}

impl Draft<Order> for OrderDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.customer, "order", "customer name")?;
        require(&self.email, "order", "email")?;
        require(&self.event_date, "order", "event date")?;
        require(&self.service, "order", "service type")
    }

    fn into_record(self, id: u32, _today: NaiveDate) -> Order {
        self.build(id)
    }
}

// ============================================================================
// Seed data
// ============================================================================

pub fn seed() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            customer: "Alice Johnson".into(),
            email: "alice@example.com".into(),
            contact: String::new(),
            event_date: "Sep 20, 2023".into(),
            service: "Wedding Photography".into(),
            status: OrderStatus::Confirmed,
            notes: String::new(),
        },
        Order {
            id: 2,
            customer: "Bob Smith".into(),
            email: "bob@example.com".into(),
            contact: String::new(),
            event_date: "Oct 5, 2023".into(),
            service: "Sound System Rental".into(),
            status: OrderStatus::Pending,
            notes: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityStore;
    use crate::shared::date::ymd;

    fn complete_draft() -> OrderDraft {
        OrderDraft {
            customer: "Carol White".into(),
            email: "carol@example.com".into(),
            event_date: "Nov 1, 2023".into(),
            service: "Catering".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_required_field_is_checked() {
        let store = EntityStore::new(seed());
        let cases: [(fn(&mut OrderDraft), &str); 4] = [
            (|d: &mut OrderDraft| d.customer.clear(), "customer name"),
            (|d: &mut OrderDraft| d.email.clear(), "email"),
            (|d: &mut OrderDraft| d.event_date.clear(), "event date"),
            (|d: &mut OrderDraft| d.service.clear(), "service type"),
        ];
        for (blank, field) in cases {
            let mut draft = complete_draft();
            blank(&mut draft);
            assert_eq!(
                store.added(draft, ymd(2024, 1, 1)).unwrap_err(),
                ValidationError::missing("order", field)
            );
        }
    }

    #[test]
    fn test_new_order_defaults_to_pending() {
        let store = EntityStore::new(seed());
        let (store, id) = store.added(complete_draft(), ymd(2024, 1, 1)).unwrap();
        assert_eq!(id, 3);
        assert_eq!(store.get(&3).unwrap().status, OrderStatus::Pending);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let store = EntityStore::new(seed());
        let mut draft = OrderDraft::from(store.get(&1).unwrap().as_ref());
        draft.status = OrderStatus::Cancelled;
        let edited = draft.apply_to(1).unwrap();
        let store = store.replaced(edited);

        let ids: Vec<u32> = store.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.get(&1).unwrap().status, OrderStatus::Cancelled);
        assert_eq!(store.get(&1).unwrap().customer, "Alice Johnson");
    }

    #[test]
    fn test_edit_with_blank_field_fails() {
        let mut draft = OrderDraft::from(&seed()[1]);
        draft.email = " ".into();
        assert!(draft.apply_to(2).is_err());
    }

    #[test]
    fn test_search_by_email_and_service() {
        let store = EntityStore::new(seed());
        assert_eq!(store.search("BOB@").len(), 1);
        assert_eq!(store.search("photography")[0].id, 1);
    }

    #[test]
    fn test_pending_count() {
        let store = EntityStore::new(seed());
        assert_eq!(store.count_where(|o| o.status == OrderStatus::Pending), 1);
    }

    #[test]
    fn test_upcoming_summary() {
        assert_eq!(
            seed()[1].upcoming_summary(),
            "Oct 5, 2023: Bob Smith - Sound System Rental"
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(&seed()[0]).unwrap();
        assert_eq!(json["eventDate"], "Sep 20, 2023");
        assert_eq!(json["status"], "Confirmed");
    }
}
