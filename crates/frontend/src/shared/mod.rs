pub mod components;
pub mod config;
pub mod date_utils;
pub mod form;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod modal;
pub mod toast;
