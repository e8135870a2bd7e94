//! Sidebar navigation between the register and report pages

use crate::routes::routes::{ROUTE_MATERIAL, ROUTE_PRODUCTS, ROUTE_SUGGESTION};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Register",
            items: vec![
                (ROUTE_PRODUCTS, "Products", "products"),
                (ROUTE_MATERIAL, "Raw materials", "inventory"),
            ],
        },
        MenuGroup {
            label: "Production",
            items: vec![(ROUTE_SUGGESTION, "Suggested production", "factory")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            {get_menu_groups().into_iter().map(|group| view! {
                <div class="sidebar__group">
                    <div class="sidebar__group-label">{group.label}</div>
                    {group.items.into_iter().map(|(href, label, icon_name)| view! {
                        <A href=href attr:class="sidebar__item">
                            {icon(icon_name)}
                            <span>{label}</span>
                        </A>
                    }).collect_view()}
                </div>
            }).collect_view()}
        </nav>
    }
}
