use crate::domain::a001_raw_material::api::fetch_raw_materials;
use contracts::domain::a001_raw_material::aggregate::RawMaterial;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Option text of a raw material in the picker
pub fn picker_label(material: &RawMaterial) -> String {
    if material.code.is_empty() {
        material.name.clone()
    } else {
        format!("{} - {}", material.code, material.name)
    }
}

/// Select of the raw materials currently on the server.
///
/// Loads `GET /material` once on mount. A failed load leaves only the
/// placeholder option; the id can still be typed by hand next to it.
#[component]
pub fn RawMaterialPicker(
    id: &'static str,
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    let items = RwSignal::new(Vec::<RawMaterial>::new());

    spawn_local(async move {
        match fetch_raw_materials().await {
            Ok(list) => {
                log::debug!("material picker: {} option(s)", list.len());
                items.set(list);
            }
            Err(e) => log::error!("material picker: failed to load options: {}", e),
        }
    });

    view! {
        <div class="form-group">
            <label for=id>"Raw material"</label>
            <select
                id=id
                class="form-group__input"
                prop:value=move || selected.get()
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                <option value="">"Select a raw material"</option>
                <For
                    each=move || items.get()
                    key=|m: &RawMaterial| m.id.clone()
                    children=move |m: RawMaterial| {
                        let value = m.id.clone();
                        let is_selected = move || selected.get() == value;
                        view! {
                            <option value=m.id.clone() selected=is_selected>
                                {picker_label(&m)}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_label() {
        let steel = RawMaterial {
            id: "4".into(),
            code: "M4".into(),
            name: "Steel".into(),
            stock_quantity: 1.0,
        };
        assert_eq!(picker_label(&steel), "M4 - Steel");

        let unnamed = RawMaterial {
            name: "Zinc".into(),
            ..Default::default()
        };
        assert_eq!(picker_label(&unnamed), "Zinc");
    }
}
