use crate::domain::a002_product::record::{FIELD_CODE, FIELD_NAME, FIELD_VALUE};
use crate::shared::components::table::format_brl;
use crate::shared::data_table::{ColumnDef, DataTable, RecordNameCell};
use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;

pub const TABLE_ID: &str = "a002-product-table";

pub fn product_columns(on_update: Option<Callback<Product>>) -> Vec<ColumnDef<Product>> {
    vec![
        ColumnDef::new(FIELD_CODE, "Code", |item: Signal<Product>| {
            view! { {move || item.with(|p| p.code.clone())} }.into_any()
        }),
        ColumnDef::new(FIELD_NAME, "Name", move |item: Signal<Product>| {
            view! { <RecordNameCell item=item on_update=on_update /> }.into_any()
        })
        .not_hideable(),
        ColumnDef::new(FIELD_VALUE, "Value", |item: Signal<Product>| {
            view! { {move || item.with(|p| format_brl(p.value))} }.into_any()
        })
        .align_right(),
    ]
}

#[component]
pub fn ProductsTable(
    #[prop(into)] data: Signal<Vec<Product>>,
    #[prop(default = None)] on_delete: Option<Callback<String>>,
    #[prop(default = None)] on_update: Option<Callback<Product>>,
) -> impl IntoView {
    view! {
        <DataTable
            data=data
            columns=product_columns(on_update)
            on_delete=on_delete
            table_id=TABLE_ID
            filter_placeholder="Filter products..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::TableState;

    #[test]
    fn test_single_product_renders_one_row_with_brl_value() {
        let json = r#"[{"id":"1","code":"A1","name":"Bolt","value":2.5}]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();

        let state = TableState::new(products);
        let rows = state.page_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Bolt");
        assert_eq!(format_brl(rows[0].value), "R$ 2,50");
    }

    #[test]
    fn test_value_column_is_right_aligned() {
        let owner = Owner::new();
        owner.set();
        let columns = product_columns(None);
        let value = columns.iter().find(|c| c.key == FIELD_VALUE).unwrap();
        assert_eq!(value.cell_class(), "table__cell text-right");
    }
}
