pub mod correct_list;
pub mod county_board;
pub mod footer;
pub mod guess_form;
pub mod header;
pub mod modal;
pub mod progress_banner;
