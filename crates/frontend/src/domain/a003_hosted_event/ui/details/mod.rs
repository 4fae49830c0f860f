mod view;

pub use view::HostedEventDetails;
