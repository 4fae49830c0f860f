pub mod dashboard;

pub use dashboard::OverviewPage;
