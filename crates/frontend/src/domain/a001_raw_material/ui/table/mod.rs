use crate::domain::a001_raw_material::record::{FIELD_CODE, FIELD_NAME, FIELD_STOCK};
use crate::shared::components::table::format_quantity;
use crate::shared::data_table::{ColumnDef, DataTable, RecordNameCell};
use contracts::domain::a001_raw_material::aggregate::RawMaterial;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

pub const TABLE_ID: &str = "a001-raw-material-table";

/// Columns of the raw material table; the name opens the row editor
pub fn raw_material_columns(on_update: Option<Callback<RawMaterial>>) -> Vec<ColumnDef<RawMaterial>> {
    vec![
        ColumnDef::new(FIELD_CODE, "Code", |item: Signal<RawMaterial>| {
            view! { {move || item.with(|m| m.code.clone())} }.into_any()
        }),
        ColumnDef::new(FIELD_NAME, "Name", move |item: Signal<RawMaterial>| {
            view! { <RecordNameCell item=item on_update=on_update /> }.into_any()
        })
        .not_hideable(),
        ColumnDef::new(FIELD_STOCK, "Stock quantity", |item: Signal<RawMaterial>| {
            view! {
                <span>{move || item.with(|m| format_quantity(m.stock_quantity))}</span>
                <Show when=move || item.with(|m| m.is_low_stock())>
                    " "
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Low stock"</Badge>
                </Show>
            }
            .into_any()
        })
        .align_right(),
    ]
}

#[component]
pub fn RawMaterialTable(
    #[prop(into)] data: Signal<Vec<RawMaterial>>,
    #[prop(default = None)] on_delete: Option<Callback<String>>,
    #[prop(default = None)] on_update: Option<Callback<RawMaterial>>,
) -> impl IntoView {
    view! {
        <DataTable
            data=data
            columns=raw_material_columns(on_update)
            on_delete=on_delete
            table_id=TABLE_ID
            filter_placeholder="Filter names..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_name_column_is_pinned() {
        let owner = Owner::new();
        owner.set();
        let columns = raw_material_columns(None);
        let keys: Vec<_> = columns.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![FIELD_CODE, FIELD_NAME, FIELD_STOCK]);
        let pinned: Vec<_> = columns.iter().filter(|c| !c.hideable).map(|c| c.key).collect();
        assert_eq!(pinned, vec![FIELD_NAME]);
    }

    #[test]
    fn test_low_stock_indicator_threshold() {
        let low = RawMaterial {
            stock_quantity: 5.0,
            ..Default::default()
        };
        let ok = RawMaterial {
            stock_quantity: 15.0,
            ..Default::default()
        };
        assert!(low.is_low_stock());
        assert!(!ok.is_low_stock());
    }
}
