use super::editor::EditorState;
use super::record::{FieldKind, TableRecord};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Slide-in drawer with an editable form for one record.
///
/// The form follows `item`: whenever the record the parent holds changes
/// (after a refetch, for instance) the draft is reset to it. Submit hands the
/// whole draft to `on_update` and leaves the drawer open; only Cancel closes it.
#[component]
pub fn RowDetailEditor<T>(
    /// Record as currently held by the table
    #[prop(into)]
    item: Signal<T>,
    /// Drawer visibility
    open: RwSignal<bool>,
    /// Drawer title
    #[prop(into)]
    title: String,
    /// Receives the edited record on submit
    on_update: Option<Callback<T>>,
) -> impl IntoView
where
    T: TableRecord,
{
    let editor = RwSignal::new(EditorState::new(item.get_untracked()));

    Effect::new(move |_| {
        let current = item.get();
        editor.update(|e| e.sync(current));
    });

    let submit = move |_| {
        let Some(on_update) = on_update else {
            log::warn!("row editor: no update handler attached");
            return;
        };
        editor.with_untracked(|e| {
            e.submit(|record| on_update.run(record));
        });
    };

    let fields = T::fields()
        .iter()
        .map(|field| {
            let key = field.key;
            let input_mode = match field.kind {
                FieldKind::Text => "text",
                FieldKind::Number => "decimal",
            };
            let input_id = format!("row-editor-{}", key);
            view! {
                <div class="form-group">
                    <label for=input_id.clone()>{field.label}</label>
                    <input
                        type="text"
                        inputmode=input_mode
                        id=input_id
                        class="form-group__input"
                        class:form-group__input--invalid=move || editor.with(|e| e.error(key).is_some())
                        prop:value=move || editor.with(|e| e.draft().field_value(key))
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            editor.update(|e| e.edit(key, &raw));
                        }
                    />
                    {move || editor.with(|e| e.error(key).map(|err| view! {
                        <div class="form-group__error">{err.to_string()}</div>
                    }))}
                </div>
            }
        })
        .collect_view();

    view! {
        <OverlayDrawer
            open=open
            position=DrawerPosition::Right
            size=DrawerSize::Medium
            mask_closeable=false
        >
            <DrawerHeader>
                <DrawerHeaderTitle>{title}</DrawerHeaderTitle>
            </DrawerHeader>
            <DrawerBody>
                <div class="details-form">
                    {fields}
                </div>
                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=Signal::derive(move || editor.with(|e| e.has_errors()))
                    >
                        {icon("save")}
                        " Submit"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| open.set(false)
                    >
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </DrawerBody>
        </OverlayDrawer>
    }
}

/// Field shown as the clickable row label
pub const NAME_FIELD: &str = "name";

/// Name cell: a link-styled button that opens the detail editor for its row
#[component]
pub fn RecordNameCell<T>(
    #[prop(into)] item: Signal<T>,
    on_update: Option<Callback<T>>,
) -> impl IntoView
where
    T: TableRecord,
{
    let open = RwSignal::new(false);
    let label = move || item.with(|r| r.field_value(NAME_FIELD));
    let title = format!("Edit {}", item.with_untracked(|r| r.field_value(NAME_FIELD)));

    view! {
        <button class="table__link" on:click=move |_| open.set(true)>
            {label}
        </button>
        <RowDetailEditor item=item open=open title=title on_update=on_update />
    }
}
