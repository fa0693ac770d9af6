pub mod context;
pub mod selection;
pub mod source;
pub mod ui;
