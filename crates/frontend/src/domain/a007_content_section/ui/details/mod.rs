mod view;

pub use view::ContentSectionDetails;
