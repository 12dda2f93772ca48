pub mod confirm;
pub mod date_utils;
pub mod dialog;
pub mod icons;
pub mod list_utils;
pub mod notify;
pub mod number_format;
pub mod page_frame;
pub mod picker;
