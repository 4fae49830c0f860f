pub mod dto;

pub use dto::{Overview, OverviewTile};
