use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Explicit lifecycle for process-wide UI state
    let ctx = AppGlobalContext::new();
    ctx.mount();
    on_cleanup(move || ctx.unmount());
    provide_context(ctx);

    view! {
        <AppRoutes />
    }
}
