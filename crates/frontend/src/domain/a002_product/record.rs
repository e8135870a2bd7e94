use crate::shared::data_table::record::{parse_decimal, EditableRecord, FieldDef, FieldError};
use crate::shared::list_utils::{compare_number, compare_text, contains_ignore_case, Searchable, Sortable};
use contracts::domain::a002_product::aggregate::Product;
use std::cmp::Ordering;

pub const FIELD_CODE: &str = "code";
pub const FIELD_NAME: &str = "name";
pub const FIELD_VALUE: &str = "value";

const FIELDS: &[FieldDef] = &[
    FieldDef::text(FIELD_CODE, "Code"),
    FieldDef::text(FIELD_NAME, "Name"),
    FieldDef::number(FIELD_VALUE, "Value (R$)"),
];

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            FIELD_CODE => compare_text(&self.code, &other.code),
            FIELD_NAME => compare_text(&self.name, &other.name),
            FIELD_VALUE => compare_number(self.value, other.value),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.name, filter)
    }
}

impl EditableRecord for Product {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn field_value(&self, key: &str) -> String {
        match key {
            FIELD_CODE => self.code.clone(),
            FIELD_NAME => self.name.clone(),
            FIELD_VALUE => self.value.to_string(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, raw: &str) -> Result<(), FieldError> {
        match key {
            FIELD_CODE => self.code = raw.to_string(),
            FIELD_NAME => self.name = raw.to_string(),
            FIELD_VALUE => self.value = parse_decimal(raw)?,
            _ => return Err(FieldError::UnknownField(key.to_string())),
        }
        Ok(())
    }
}
