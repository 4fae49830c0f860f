pub mod page_header;
pub mod star_rating;
pub mod stat_card;
pub mod tab_bar;
pub mod table_toggle;
pub mod ui;
