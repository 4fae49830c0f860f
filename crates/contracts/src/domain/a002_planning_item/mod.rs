pub mod aggregate;

pub use aggregate::{seed, PlanningItem, PlanningItemDraft, PlanningStats};
