mod view;

pub use view::PlanningItemDetails;
