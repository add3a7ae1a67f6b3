pub mod api_utils;
pub mod date_utils;
pub mod modal_frame;
pub mod modal_stack;
