pub mod date;
pub mod list;
