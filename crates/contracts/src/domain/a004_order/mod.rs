pub mod aggregate;

pub use aggregate::{seed, Order, OrderDraft, OrderStatus};
