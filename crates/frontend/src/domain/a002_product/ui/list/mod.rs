use crate::domain::a001_raw_material::ui::picker::RawMaterialPicker;
use crate::domain::a002_product::api::ProductApi;
use crate::domain::a002_product::ui::table::ProductsTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{FormDrawer, NumberField, TextField};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::state::{RecordMutator, RegisterController};
use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn RegisterProductPage() -> impl IntoView {
    let ctrl = RegisterController::new(ProductApi);
    let value_invalid = RwSignal::new(false);
    let quantity_invalid = RwSignal::new(false);

    let fetch = move || {
        spawn_local(async move {
            let _ = ctrl.load().await;
        });
    };

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            let _ = RecordMutator::delete(&ctrl, id).await;
        });
    });

    let on_update = Callback::new(move |record: Product| {
        spawn_local(async move {
            let _ = RecordMutator::update(&ctrl, record).await;
        });
    });

    let on_create = Callback::new(move |_: ()| {
        spawn_local(async move {
            let _ = ctrl.create().await;
        });
    });

    let material_id = Signal::derive(move || ctrl.state.with(|s| s.draft.raw_material_id.clone()));
    let set_material_id = Callback::new(move |id: String| ctrl.edit_draft(|d| d.raw_material_id = id));

    fetch();

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Products" subtitle="Finished goods and their unit price">
                <button class="button button--primary" on:click=move |_| ctrl.set_create_open(true)>
                    {icon("plus")}
                    "New product"
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| fetch()
                    disabled=move || ctrl.is_busy()
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="page__content">
                <ProductsTable
                    data=ctrl.items()
                    on_delete=Some(on_delete)
                    on_update=Some(on_update)
                />
            </div>

            <FormDrawer
                open=ctrl.create_open
                title="New product"
                on_submit=on_create
                submit_disabled=Signal::derive(move || value_invalid.get() || quantity_invalid.get())
            >
                <TextField
                    id="a002-new-code"
                    label="Code"
                    value=Signal::derive(move || ctrl.state.with(|s| s.draft.code.clone()))
                    on_input=Callback::new(move |v: String| ctrl.edit_draft(|d| d.code = v))
                />
                <TextField
                    id="a002-new-name"
                    label="Name"
                    value=Signal::derive(move || ctrl.state.with(|s| s.draft.name.clone()))
                    on_input=Callback::new(move |v: String| ctrl.edit_draft(|d| d.name = v))
                />
                <NumberField
                    id="a002-new-value"
                    label="Value (R$)"
                    value=Signal::derive(move || ctrl.state.with(|s| s.draft.value))
                    on_value=Callback::new(move |v: f64| ctrl.edit_draft(|d| d.value = v))
                    invalid=value_invalid
                />
                <RawMaterialPicker
                    id="a002-new-material"
                    selected=material_id
                    on_select=set_material_id
                />
                <TextField
                    id="a002-new-material-id"
                    label="Raw material id"
                    value=material_id
                    on_input=set_material_id
                    placeholder="Or type the id"
                />
                <NumberField
                    id="a002-new-quantity"
                    label="Quantity of raw material"
                    value=Signal::derive(move || ctrl.state.with(|s| s.draft.raw_material_quantity))
                    on_value=Callback::new(move |v: f64| ctrl.edit_draft(|d| d.raw_material_quantity = v))
                    invalid=quantity_invalid
                />
            </FormDrawer>
        </PageFrame>
    }
}
