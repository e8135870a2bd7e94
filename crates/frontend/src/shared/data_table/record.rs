//! Record traits the data table and the detail editor are generic over.

use crate::shared::list_utils::{Searchable, Sortable};
use contracts::domain::common::Identified;
use thiserror::Error;

/// Everything a row type needs to live in a [`super::DataTable`]
pub trait TableRecord:
    Identified + Sortable + Searchable + EditableRecord + Clone + PartialEq + Send + Sync + 'static
{
}

impl<T> TableRecord for T where
    T: Identified
        + Sortable
        + Searchable
        + EditableRecord
        + Clone
        + PartialEq
        + Send
        + Sync
        + 'static
{
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// Editable field shown in the detail editor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
        }
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("\"{0}\" is not a number")]
    InvalidNumber(String),
    #[error("unknown field {0}")]
    UnknownField(String),
}

/// Record whose fields can be read and written as strings by a form.
///
/// The `id` is never part of [`EditableRecord::fields`].
pub trait EditableRecord {
    fn fields() -> &'static [FieldDef];

    fn field_value(&self, key: &str) -> String;

    fn set_field(&mut self, key: &str, raw: &str) -> Result<(), FieldError>;
}

/// Parses a decimal typed by the user.
///
/// `2.5` and `2,5` are both accepted. When both separators appear, the last
/// one is the decimal mark and the other groups thousands, so `1.234,56` and
/// `1,234.56` both read as 1234.56.
pub fn parse_decimal(raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    let normalized = match (trimmed.rfind(','), trimmed.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (Some(_), None) => trimmed.replace(',', "."),
        _ => trimmed.to_string(),
    };
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FieldError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("2.5"), Ok(2.5));
        assert_eq!(parse_decimal(" 2,5 "), Ok(2.5));
        assert_eq!(parse_decimal("1,234.5"), Ok(1234.5));
        assert_eq!(parse_decimal("10"), Ok(10.0));
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("abc").is_err());
        assert!(parse_decimal("inf").is_err());
    }

    #[test]
    fn test_parse_decimal_brazilian_grouping() {
        assert_eq!(parse_decimal("1.234,56"), Ok(1234.56));
        assert_eq!(parse_decimal("12.345.678,9"), Ok(12345678.9));
        assert_eq!(parse_decimal("1,234,567.25"), Ok(1234567.25));
        assert!(parse_decimal("1,2,3").is_err());
    }
}
