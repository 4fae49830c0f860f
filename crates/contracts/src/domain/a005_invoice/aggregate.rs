use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::Record;
use crate::shared::list::{compare_text, Sortable};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Unpaid => "Unpaid",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            InvoiceStatus::Paid => InvoiceStatus::Unpaid,
            InvoiceStatus::Unpaid => InvoiceStatus::Paid,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: u32,
    pub rate: f64,
}

impl InvoiceLine {
    pub fn amount(&self) -> f64 {
        f64::from(self.quantity) * self.rate
    }
}

/// Invoice issued for an order; the id is the invoice number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub customer: String,
    pub email: String,
    pub date: String,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceLine>,
}

impl Invoice {
    /// Sum of quantity × rate over all lines
    pub fn total(&self) -> f64 {
        self.items.iter().map(InvoiceLine::amount).sum()
    }

    pub fn with_status(&self, status: InvoiceStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl Record for Invoice {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.customer, &self.id, &self.email]
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "invoice"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }
}

impl Sortable for Invoice {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "number" => self.id.cmp(&other.id),
            "customer" => compare_text(&self.customer, &other.customer),
            "total" => self.total().total_cmp(&other.total()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

/// Money amount as shown in tables, e.g. "$1700.00"
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

// ============================================================================
// Seed data
// ============================================================================

pub fn seed() -> Vec<Invoice> {
    vec![Invoice {
        id: "INV-2023-001".into(),
        customer: "Alice Johnson".into(),
        email: "alice@example.com".into(),
        date: "Jun 16, 2023".into(),
        status: InvoiceStatus::Paid,
        items: vec![
            InvoiceLine {
                description: "Wedding Photography Package".into(),
                quantity: 1,
                rate: 1500.0,
            },
            InvoiceLine {
                description: "Extra hour coverage".into(),
                quantity: 1,
                rate: 200.0,
            },
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityStore;

    #[test]
    fn test_total_is_sum_of_lines() {
        let invoice = &seed()[0];
        assert_eq!(invoice.total(), 1700.0);
        assert_eq!(format_money(invoice.total()), "$1700.00");

        let mut bigger = invoice.clone();
        bigger.items.push(InvoiceLine {
            description: "Album".into(),
            quantity: 3,
            rate: 12.5,
        });
        assert_eq!(bigger.total(), 1737.5);
    }

    #[test]
    fn test_search_by_number() {
        let store = EntityStore::new(seed());
        assert_eq!(store.search("inv-2023").len(), 1);
        assert!(store.search("INV-2024").is_empty());
    }

    #[test]
    fn test_mark_unpaid() {
        let store = EntityStore::new(seed());
        let id = "INV-2023-001".to_string();
        let store = store.updated(&id, |inv| inv.with_status(inv.status.toggled()));
        assert_eq!(store.get(&id).unwrap().status, InvoiceStatus::Unpaid);
        assert_eq!(
            store.count_where(|inv| inv.status == InvoiceStatus::Unpaid),
            1
        );
    }
}
