pub mod list;
pub mod picker;
pub mod table;
