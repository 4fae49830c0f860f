mod view;

pub use view::TestimonialDetails;
