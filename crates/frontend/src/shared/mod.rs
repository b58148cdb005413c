pub mod api_utils;
pub mod catalog_select;
pub mod filters;
pub mod flash;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
