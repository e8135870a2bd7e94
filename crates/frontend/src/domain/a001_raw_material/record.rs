//! Table and editor bindings for [`RawMaterial`].

use crate::shared::data_table::record::{parse_decimal, EditableRecord, FieldDef, FieldError};
use crate::shared::list_utils::{compare_number, compare_text, contains_ignore_case, Searchable, Sortable};
use contracts::domain::a001_raw_material::aggregate::RawMaterial;
use std::cmp::Ordering;

pub const FIELD_CODE: &str = "code";
pub const FIELD_NAME: &str = "name";
pub const FIELD_STOCK: &str = "stockQuantity";

const FIELDS: &[FieldDef] = &[
    FieldDef::text(FIELD_CODE, "Code"),
    FieldDef::text(FIELD_NAME, "Name"),
    FieldDef::number(FIELD_STOCK, "Stock quantity"),
];

impl Sortable for RawMaterial {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            FIELD_CODE => compare_text(&self.code, &other.code),
            FIELD_NAME => compare_text(&self.name, &other.name),
            FIELD_STOCK => compare_number(self.stock_quantity, other.stock_quantity),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for RawMaterial {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.name, filter)
    }
}

impl EditableRecord for RawMaterial {
    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn field_value(&self, key: &str) -> String {
        match key {
            FIELD_CODE => self.code.clone(),
            FIELD_NAME => self.name.clone(),
            FIELD_STOCK => self.stock_quantity.to_string(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, raw: &str) -> Result<(), FieldError> {
        match key {
            FIELD_CODE => self.code = raw.to_string(),
            FIELD_NAME => self.name = raw.to_string(),
            FIELD_STOCK => self.stock_quantity = parse_decimal(raw)?,
            _ => return Err(FieldError::UnknownField(key.to_string())),
        }
        Ok(())
    }
}
