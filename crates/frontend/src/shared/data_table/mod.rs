//! Reusable data table: engine, row editor and Leptos components.

pub mod actions;
pub mod column;
pub mod component;
pub mod drawer;
pub mod editor;
pub mod engine;
pub mod record;

pub use column::{ColumnAlign, ColumnDef};
pub use component::DataTable;
pub use drawer::{RecordNameCell, RowDetailEditor};
pub use editor::EditorState;
pub use engine::{TableState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use record::{EditableRecord, FieldDef, FieldError, FieldKind, TableRecord};
