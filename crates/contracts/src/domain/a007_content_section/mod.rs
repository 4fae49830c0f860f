pub mod aggregate;

pub use aggregate::{seed, ContentSection, ContentSectionDraft};
