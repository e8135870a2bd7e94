use crate::domain::a001_raw_material::api::RawMaterialApi;
use crate::domain::a001_raw_material::ui::table::RawMaterialTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{FormDrawer, NumberField, TextField};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::state::{RecordMutator, RegisterController};
use contracts::domain::a001_raw_material::aggregate::RawMaterial;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn RegisterRawMaterialPage() -> impl IntoView {
    let ctrl = RegisterController::new(RawMaterialApi);
    let stock_invalid = RwSignal::new(false);

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

    let on_update = Callback::new(move |record: RawMaterial| {
        spawn_local(async move {
            let _ = RecordMutator::update(&ctrl, record).await;
        });
    });

    let on_create = Callback::new(move |_: ()| {
        spawn_local(async move {
            let _ = ctrl.create().await;
        });
    });

    fetch();

    view! {
        <PageFrame page_id="a001_raw_material--list" category=PAGE_CAT_LIST>
            <PageHeader title="Raw materials" subtitle="Stock used by production">
                <button class="button button--primary" on:click=move |_| ctrl.set_create_open(true)>
                    {icon("plus")}
                    "New raw material"
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
                <RawMaterialTable
                    data=ctrl.items()
                    on_delete=Some(on_delete)
                    on_update=Some(on_update)
                />
            </div>

            <FormDrawer
                open=ctrl.create_open
                title="New raw material"
                on_submit=on_create
                submit_disabled=Signal::derive(move || stock_invalid.get())
            >
                <TextField
                    id="a001-new-code"
                    label="Code"
                    value=Signal::derive(move || ctrl.state.with(|s| s.draft.code.clone()))
                    on_input=Callback::new(move |v: String| ctrl.edit_draft(|d| d.code = v))
                />
                <TextField
                    id="a001-new-name"
                    label="Name"
                    value=Signal::derive(move || ctrl.state.with(|s| s.draft.name.clone()))
                    on_input=Callback::new(move |v: String| ctrl.edit_draft(|d| d.name = v))
                />
                <NumberField
                    id="a001-new-stock"
                    label="Stock quantity"
                    value=Signal::derive(move || ctrl.state.with(|s| s.draft.stock_quantity))
                    on_value=Callback::new(move |v: f64| ctrl.edit_draft(|d| d.stock_quantity = v))
                    invalid=stock_invalid
                />
            </FormDrawer>
        </PageFrame>
    }
}
