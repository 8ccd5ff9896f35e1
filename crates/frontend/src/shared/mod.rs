pub mod api;
pub mod components;
pub mod data_grid;
pub mod date_utils;
pub mod export;
pub mod list_utils;
pub mod page_frame;
