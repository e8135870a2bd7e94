use super::actions::{browser_confirm, confirm_delete};
use super::column::ColumnDef;
use super::drawer::NAME_FIELD;
use super::engine::{TableState, PAGE_SIZE_OPTIONS};
use super::record::TableRecord;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use std::sync::Arc;

/// Logs a drag payload the browser refused; the drag itself still works
/// because the active row is tracked in a signal.
fn drag_payload_stored<E: std::fmt::Debug>(id: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::debug!("drag of {id}: payload not stored: {e:?}");
            false
        }
    }
}

/// Sortable, filterable, paginated table with drag-reorderable rows.
///
/// `data` is the list the page fetched last and is always authoritative: every
/// time it changes the local copy is reconciled against it, which also throws
/// away any drag reorder. Reordering is cosmetic and never reaches the server.
#[component]
pub fn DataTable<T>(
    /// Server list to display
    #[prop(into)]
    data: Signal<Vec<T>>,
    /// Entity columns, in display order
    columns: Vec<ColumnDef<T>>,
    /// Called with the row id after the user confirms a delete
    #[prop(default = None)]
    on_delete: Option<Callback<String>>,
    /// DOM id of the `<table>` element
    table_id: &'static str,
    /// Placeholder of the name filter input
    #[prop(optional, into)]
    filter_placeholder: String,
) -> impl IntoView
where
    T: TableRecord,
{
    let state = RwSignal::new(TableState::new(data.get_untracked()));
    let dragging = RwSignal::new(None::<String>);
    let columns_open = RwSignal::new(false);

    // Server list wins over the local copy
    Effect::new(move |_| {
        let rows = data.get();
        state.update(|s| s.reconcile(rows));
    });

    let column_count = columns.len() + 3;
    let menu_items: Vec<(&'static str, &'static str)> = columns
        .iter()
        .filter(|c| c.hideable)
        .map(|c| (c.key, c.header))
        .collect();
    let columns = Arc::new(columns);

    let header_cells = columns
        .iter()
        .map(|col| {
            let key = col.key;
            let header = col.header;
            let sortable = col.sortable;
            view! {
                <Show when=move || state.with(|s| s.is_column_visible(key))>
                    <th class="table__header-cell">
                        {if sortable {
                            view! {
                                <div
                                    class="table__sortable-header"
                                    style="cursor: pointer;"
                                    on:click=move |_| state.update(|s| s.toggle_sort(key))
                                >
                                    {header}
                                    <span class=move || state.with(|s| get_sort_class(s.sort_key(), key))>
                                        {move || state.with(|s| get_sort_indicator(s.sort_key(), key))}
                                    </span>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! { <span>{header}</span> }.into_any()
                        }}
                    </th>
                </Show>
            }
        })
        .collect_view();

    let render_row = {
        let columns = columns.clone();
        move |row: T| {
            let id = row.id().to_string();
            let item = {
                let id = id.clone();
                let initial = row.clone();
                Memo::new(move |_| {
                    state
                        .with(|s| s.rows().iter().find(|r| r.id() == id).cloned())
                        .unwrap_or_else(|| initial.clone())
                })
            };

            let cells = columns
                .iter()
                .map(|col| {
                    let key = col.key;
                    let class = col.cell_class();
                    let render = col.render.clone();
                    view! {
                        <Show when=move || state.with(|s| s.is_column_visible(key))>
                            <td class=class>{render(item.into())}</td>
                        </Show>
                    }
                })
                .collect_view();

            let id_selected = id.clone();
            let id_dragging = id.clone();
            let id_drag_start = id.clone();
            let id_drop = id.clone();
            let id_checked = id.clone();
            let id_toggle = id.clone();
            let id_delete = id;

            view! {
                <tr
                    class="table__row"
                    class:table__row--selected=move || state.with(|s| s.is_selected(&id_selected))
                    class:table__row--dragging=move || dragging.with(|d| d.as_deref() == Some(id_dragging.as_str()))
                    draggable="true"
                    on:dragstart=move |ev| {
                        if let Some(dt) = ev.data_transfer() {
                            drag_payload_stored(&id_drag_start, dt.set_data("text/plain", &id_drag_start));
                        }
                        dragging.set(Some(id_drag_start.clone()));
                    }
                    on:dragover=move |ev| ev.prevent_default()
                    on:drop=move |ev| {
                        ev.prevent_default();
                        if let Some(active) = dragging.get_untracked() {
                            state.update(|s| {
                                s.move_row(&active, &id_drop);
                            });
                        }
                        dragging.set(None);
                    }
                    on:dragend=move |_| dragging.set(None)
                >
                    <td class="table__cell table__cell--handle" title="Drag to reorder">
                        {icon("grip")}
                    </td>
                    <td class="table__cell table__cell--checkbox">
                        <input
                            type="checkbox"
                            class="table__checkbox"
                            prop:checked=move || state.with(|s| s.is_selected(&id_checked))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                state.update(|s| s.toggle_row(&id_toggle, checked));
                            }
                        />
                    </td>
                    {cells}
                    <td class="table__cell table__cell--actions">
                        {on_delete.map(|on_delete| view! {
                            <button
                                class="button button--icon button--danger"
                                title="Delete"
                                on:click=move |_| {
                                    let label = item.with_untracked(|r| r.field_value(NAME_FIELD));
                                    confirm_delete(&id_delete, &label, browser_confirm, |id| on_delete.run(id));
                                }
                            >
                                {icon("delete")}
                            </button>
                        })}
                    </td>
                </tr>
            }
        }
    };

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <input
                    type="text"
                    class="form-group__input data-table__filter"
                    placeholder=filter_placeholder
                    prop:value=move || state.with(|s| s.filter().to_string())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        state.update(|s| s.set_filter(query));
                    }
                />
                <div class="data-table__columns">
                    <button
                        class="button button--secondary"
                        on:click=move |_| columns_open.update(|v| *v = !*v)
                    >
                        {icon("columns")}
                        " Columns"
                    </button>
                    <Show when=move || columns_open.get()>
                        <div class="dropdown">
                            {menu_items.clone().into_iter().map(|(key, header)| view! {
                                <label class="dropdown__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || state.with(|s| s.is_column_visible(key))
                                        on:change=move |_| state.update(|s| s.toggle_column(key))
                                    />
                                    {header}
                                </label>
                            }).collect_view()}
                        </div>
                    </Show>
                </div>
            </div>

            <div class="table-wrapper">
                <table id=table_id class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--handle"></th>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    prop:checked=move || state.with(|s| s.is_page_selected())
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        state.update(|s| s.toggle_page(checked));
                                    }
                                />
                            </th>
                            {header_cells}
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|s| s.page_rows())
                            key=|row: &T| row.id().to_string()
                            children=render_row
                        />
                        <Show when=move || state.with(|s| s.filtered_count() == 0)>
                            <tr>
                                <td class="table__cell table__cell--empty" colspan=column_count>
                                    "No results."
                                </td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>

            <div class="data-table__footer">
                <span class="data-table__selection">
                    {move || state.with(|s| format!(
                        "{} of {} row(s) selected.",
                        s.selected_count(),
                        s.filtered_count()
                    ))}
                </span>
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page_index()))
                    total_pages=Signal::derive(move || state.with(|s| s.page_count()))
                    page_size=Signal::derive(move || state.with(|s| s.page_size()))
                    on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
                    on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                    page_size_options=PAGE_SIZE_OPTIONS.to_vec()
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_payload_result_is_reported() {
        assert!(drag_payload_stored::<&str>("7", Ok(())));
        assert!(!drag_payload_stored("7", Err("DataTransfer is read-only")));
    }
}
