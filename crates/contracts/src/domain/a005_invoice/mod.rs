pub mod aggregate;

pub use aggregate::{format_money, seed, Invoice, InvoiceLine, InvoiceStatus};
