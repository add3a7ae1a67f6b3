pub mod list;
pub mod reserve_form;
