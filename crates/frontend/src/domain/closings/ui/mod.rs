pub mod form;
pub mod list;
pub mod new_closing;
