pub mod u501_select_area;
pub mod u502_submit_report;
pub mod u503_toggle_dark_mode;
