pub mod form_drawer;

pub use form_drawer::{FormDrawer, NumberField, TextField};
