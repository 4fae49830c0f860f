pub mod aggregate;

pub use aggregate::{seed, Testimonial, TestimonialDraft, EVENT_TYPES, MAX_RATING};
