pub mod aggregate;

pub use aggregate::{seed, Service, ServiceCategory, ServiceDraft, ServiceStats};
