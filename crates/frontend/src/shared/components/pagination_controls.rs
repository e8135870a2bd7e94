use crate::shared::icons::icon;
use leptos::prelude::*;

/// Target page of a navigation button, `None` when it must be disabled
fn target_page(kind: NavKind, current: usize, total: usize) -> Option<usize> {
    let last = total.checked_sub(1)?;
    match kind {
        NavKind::First if current > 0 => Some(0),
        NavKind::Previous if current > 0 => Some(current - 1),
        NavKind::Next if current < last => Some(current + 1),
        NavKind::Last if current < last => Some(last),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavKind {
    First,
    Previous,
    Next,
    Last,
}

impl NavKind {
    fn title(self) -> &'static str {
        match self {
            NavKind::First => "First page",
            NavKind::Previous => "Previous page",
            NavKind::Next => "Next page",
            NavKind::Last => "Last page",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NavKind::First => "chevrons-left",
            NavKind::Previous => "chevron-left",
            NavKind::Next => "chevron-right",
            NavKind::Last => "chevrons-right",
        }
    }
}

/// Footer with rows-per-page select, a 1-based "Page X of Y" label and
/// first/previous/next/last buttons disabled at the bounds.
#[component]
pub fn PaginationControls(
    /// 0-based
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let nav = move |kind: NavKind| {
        let target = move || target_page(kind, current_page.get(), total_pages.get());
        view! {
            <button
                class="pagination-btn"
                title=kind.title()
                disabled=move || target().is_none()
                on:click=move |_| {
                    if let Some(page) = target() {
                        on_page_change.run(page);
                    }
                }
            >
                {icon(kind.icon())}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            <label class="pagination-size">
                "Rows per page "
                <select
                    class="page-size-select"
                    prop:value=move || page_size.get().to_string()
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<usize>() {
                            Ok(size) => on_page_size_change.run(size),
                            Err(e) => log::warn!("pagination: bad page size: {e}"),
                        }
                    }
                >
                    {page_size_options
                        .into_iter()
                        .map(|size| view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
            <span class="pagination-info">
                {move || format!("Page {} of {}", current_page.get() + 1, total_pages.get())}
            </span>
            {nav(NavKind::First)}
            {nav(NavKind::Previous)}
            {nav(NavKind::Next)}
            {nav(NavKind::Last)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_disabled_at_bounds() {
        assert_eq!(target_page(NavKind::First, 0, 3), None);
        assert_eq!(target_page(NavKind::Previous, 0, 3), None);
        assert_eq!(target_page(NavKind::Next, 2, 3), None);
        assert_eq!(target_page(NavKind::Last, 2, 3), None);
    }

    #[test]
    fn test_buttons_target_neighbours() {
        assert_eq!(target_page(NavKind::First, 2, 5), Some(0));
        assert_eq!(target_page(NavKind::Previous, 2, 5), Some(1));
        assert_eq!(target_page(NavKind::Next, 2, 5), Some(3));
        assert_eq!(target_page(NavKind::Last, 2, 5), Some(4));
    }

    #[test]
    fn test_empty_table_disables_everything() {
        for kind in [NavKind::First, NavKind::Previous, NavKind::Next, NavKind::Last] {
            assert_eq!(target_page(kind, 0, 0), None);
        }
    }
}
