pub mod a001_service;
pub mod a002_planning_item;
pub mod a003_hosted_event;
pub mod a004_order;
pub mod a005_invoice;
pub mod a006_testimonial;
pub mod a007_content_section;
pub mod common;
