//! Wire contracts shared between the admin UI and the inventory REST API.
//!
//! `domain` holds the records the UI can create, edit and delete;
//! `projections` holds read-only reports computed by the backend.

pub mod domain;
pub mod projections;
