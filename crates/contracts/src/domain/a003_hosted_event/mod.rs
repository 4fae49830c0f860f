pub mod aggregate;

pub use aggregate::{seed, EventStats, EventType, HostedEvent, HostedEventDraft};
