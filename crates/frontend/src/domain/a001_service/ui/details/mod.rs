//! "Add New Service/Rental" dialog

mod view;

pub use view::ServiceDetails;
