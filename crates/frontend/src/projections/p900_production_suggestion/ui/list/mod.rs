mod state;

use crate::projections::p900_production_suggestion::api::fetch_suggestions;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_brl, TableCellMoney};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_REPORT};
use contracts::projections::p900_production_suggestion::dto::ProductionSuggestion;
use leptos::prelude::*;
use state::{row_key, SuggestionListState};
use wasm_bindgen_futures::spawn_local;

/// Read-only report of the production the current stock allows
#[component]
pub fn SuggestedProductionPage() -> impl IntoView {
    let state = RwSignal::new(SuggestionListState::default());

    let load = move || {
        state.update(|s| s.is_loading = true);
        spawn_local(async move {
            match fetch_suggestions().await {
                Ok(items) => {
                    log::debug!("production suggestion: loaded {} line(s)", items.len());
                    state.update(|s| {
                        s.items = items;
                        s.is_loading = false;
                    });
                }
                Err(e) => {
                    log::error!("production suggestion: failed to load: {}", e);
                    state.update(|s| s.is_loading = false);
                }
            }
        });
    };

    load();

    view! {
        <PageFrame page_id="p900_production_suggestion--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Suggested production" subtitle="Computed by the server from current stock">
                <button
                    class="button button--secondary"
                    on:click=move |_| load()
                    disabled=move || state.with(|s| s.is_loading)
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="page__content">
                <div class="table-wrapper">
                    <table id="p900-production-suggestion-table" class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Code"</th>
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell text-right">"Quantity"</th>
                                <th class="table__header-cell text-right">"Unit price"</th>
                                <th class="table__header-cell text-right">"Total value"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.items.clone().into_iter().enumerate().collect::<Vec<_>>())
                                key=|(index, line): &(usize, ProductionSuggestion)| row_key(*index, line)
                                children=move |(_, line): (usize, ProductionSuggestion)| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{line.code}</td>
                                        <td class="table__cell">{line.product_name}</td>
                                        <td class="table__cell text-right">{line.quantity.to_string()}</td>
                                        <TableCellMoney value=line.unit_price />
                                        <td class="table__cell text-right">{line.total_value}</td>
                                    </tr>
                                }
                            />
                            <Show when=move || state.with(|s| s.items.is_empty())>
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan="5">
                                        "No results."
                                    </td>
                                </tr>
                            </Show>
                        </tbody>
                        <tfoot>
                            <tr class="table__row table__row--total">
                                <td class="table__cell" colspan="2">"Total"</td>
                                <td class="table__cell text-right">
                                    {move || state.with(|s| s.total_units().to_string())}
                                </td>
                                <td class="table__cell"></td>
                                <td class="table__cell table__cell--money">
                                    <strong>{move || state.with(|s| format_brl(s.grand_total()))}</strong>
                                </td>
                            </tr>
                        </tfoot>
                    </table>
                </div>
            </div>
        </PageFrame>
    }
}
