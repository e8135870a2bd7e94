//! Table cell for currency values
//!
//! # Examples
//!
//! ```rust,ignore
//! <TableCellMoney value=product.value />
//! ```

use super::number_format::format_brl;
use leptos::prelude::*;

/// Right-aligned table cell showing a value as BRL (`R$ 1.234,56`).
///
/// Negative values are tinted with the error color.
#[component]
pub fn TableCellMoney(
    /// Value to render
    value: f64,

    /// Bold text (used for totals)
    #[prop(optional)]
    bold: bool,
) -> impl IntoView {
    let mut styles = Vec::new();
    if value < 0.0 {
        styles.push("color: var(--color-error-700)");
    }
    if bold {
        styles.push("font-weight: 600");
    }

    view! {
        <td class="table__cell table__cell--money">
            <span style=styles.join("; ")>{format_brl(value)}</span>
        </td>
    }
}
