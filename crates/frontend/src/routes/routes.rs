use crate::domain::a001_raw_material::ui::list::RegisterRawMaterialPage;
use crate::domain::a002_product::ui::list::RegisterProductPage;
use crate::layout::Shell;
use crate::projections::p900_production_suggestion::ui::list::SuggestedProductionPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

pub const ROUTE_PRODUCTS: &str = "/register/products";
pub const ROUTE_MATERIAL: &str = "/register/material";
pub const ROUTE_SUGGESTION: &str = "/suggestion";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="page">"Page not found."</div> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=ROUTE_PRODUCTS /> } />
                    <Route path=path!("/register/products") view=RegisterProductPage />
                    <Route path=path!("/register/material") view=RegisterRawMaterialPage />
                    <Route path=path!("/suggestion") view=SuggestedProductionPage />
                </Routes>
            </Shell>
        </Router>
    }
}
