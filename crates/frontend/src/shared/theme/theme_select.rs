use super::Theme;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// ThemeSelect component for switching themes
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let is_open = RwSignal::new(false);

    let change_theme = move |theme: Theme| {
        ctx.set_theme(theme);
        is_open.set(false);
    };

    view! {
        <div class="theme-select-wrapper">
            <button
                class="button button--ghost button--small"
                on:click=move |_| is_open.update(|v| *v = !*v)
            >
                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>
                </svg>
                " Theme"
            </button>

            <Show when=move || is_open.get()>
                <div class="theme-dropdown">
                    {Theme::all().into_iter().map(|theme| view! {
                        <button
                            class=move || if ctx.theme.get() == theme {
                                "theme-dropdown-item active"
                            } else {
                                "theme-dropdown-item"
                            }
                            on:click=move |_| change_theme(theme)
                        >
                            {theme.display_name()}
                        </button>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
