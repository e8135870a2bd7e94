//! Form state behind the row detail drawer.

use super::record::{EditableRecord, FieldError};
use std::collections::HashMap;

/// Local editable copy of one record.
///
/// Submitting hands the whole draft to the caller (a full replace, not a
/// patch). Nothing here closes the drawer.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState<T> {
    original: T,
    draft: T,
    errors: HashMap<&'static str, FieldError>,
}

impl<T> EditorState<T>
where
    T: EditableRecord + Clone + PartialEq,
{
    pub fn new(item: T) -> Self {
        Self {
            original: item.clone(),
            draft: item,
            errors: HashMap::new(),
        }
    }

    /// Re-seeds the form from the item the parent currently holds
    pub fn sync(&mut self, item: T) {
        self.original = item.clone();
        self.draft = item;
        self.errors.clear();
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn original(&self) -> &T {
        &self.original
    }

    /// Applies raw input to a draft field.
    ///
    /// Invalid input is remembered as an error and the field keeps its last
    /// valid value.
    pub fn edit(&mut self, key: &str, raw: &str) {
        let Some(field) = T::fields().iter().find(|f| f.key == key) else {
            log::warn!("editor: ignoring unknown field {key}");
            return;
        };
        match self.draft.set_field(key, raw) {
            Ok(()) => {
                self.errors.remove(field.key);
            }
            Err(e) => {
                self.errors.insert(field.key, e);
            }
        }
    }

    pub fn error(&self, key: &str) -> Option<&FieldError> {
        self.errors.get(key)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Calls `on_update` once with the whole draft. Refused while any field
    /// holds invalid input.
    pub fn submit(&self, on_update: impl FnOnce(T)) -> bool {
        if self.has_errors() {
            log::debug!("editor: submit blocked by {} invalid field(s)", self.errors.len());
            return false;
        }
        on_update(self.draft.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::record::{parse_decimal, FieldDef};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Part {
        id: String,
        code: String,
        name: String,
        value: f64,
    }

    const PART_FIELDS: &[FieldDef] = &[
        FieldDef::text("code", "Code"),
        FieldDef::text("name", "Name"),
        FieldDef::number("value", "Value"),
    ];

    impl EditableRecord for Part {
        fn fields() -> &'static [FieldDef] {
            PART_FIELDS
        }

        fn field_value(&self, key: &str) -> String {
            match key {
                "code" => self.code.clone(),
                "name" => self.name.clone(),
                "value" => self.value.to_string(),
                _ => String::new(),
            }
        }

        fn set_field(&mut self, key: &str, raw: &str) -> Result<(), FieldError> {
            match key {
                "code" => self.code = raw.to_string(),
                "name" => self.name = raw.to_string(),
                "value" => self.value = parse_decimal(raw)?,
                other => return Err(FieldError::UnknownField(other.to_string())),
            }
            Ok(())
        }
    }

    fn bolt() -> Part {
        Part {
            id: "1".into(),
            code: "A1".into(),
            name: "Bolt".into(),
            value: 2.5,
        }
    }

    #[test]
    fn test_submit_sends_whole_record_once() {
        let mut editor = EditorState::new(bolt());
        editor.edit("name", "Hex bolt");

        let mut calls = Vec::new();
        assert!(editor.submit(|p| calls.push(p)));

        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            Part {
                name: "Hex bolt".into(),
                ..bolt()
            }
        );
    }

    #[test]
    fn test_invalid_number_blocks_submit_and_keeps_value() {
        let mut editor = EditorState::new(bolt());
        editor.edit("value", "two");
        assert!(editor.has_errors());
        assert_eq!(editor.draft().value, 2.5);

        let mut called = false;
        assert!(!editor.submit(|_| called = true));
        assert!(!called);

        editor.edit("value", "3,75");
        assert!(editor.error("value").is_none());
        assert_eq!(editor.draft().value, 3.75);
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_sync_replaces_draft_with_new_item() {
        let mut editor = EditorState::new(bolt());
        editor.edit("code", "ZZ");
        editor.edit("value", "x");

        let refreshed = Part {
            value: 3.0,
            ..bolt()
        };
        editor.sync(refreshed.clone());

        assert_eq!(editor.draft(), &refreshed);
        assert_eq!(editor.original(), &refreshed);
        assert!(!editor.has_errors());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut editor = EditorState::new(bolt());
        editor.edit("id", "999");
        assert_eq!(editor.draft().id, "1");
        assert!(!editor.has_errors());
    }
}
