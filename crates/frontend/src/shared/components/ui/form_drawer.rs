//! Create forms shown in a right-side drawer.

use crate::shared::data_table::record::parse_decimal;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Drawer with a form body, a Submit and a Cancel button.
///
/// Only Cancel closes it; a successful submit is expected to close it from
/// the outside.
#[component]
pub fn FormDrawer(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    on_submit: Callback<()>,
    /// Disables Submit, e.g. while a field does not parse
    #[prop(optional, into)]
    submit_disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
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
                    {children()}
                </div>
                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_submit.run(())
                        disabled=submit_disabled
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

/// Labelled text input bound to a getter and a setter
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                class="form-group__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled decimal input.
///
/// The raw text is kept locally so a half-typed value is not wiped; only
/// parsed values reach `on_value`. `invalid` is raised while the text does not
/// parse and can be used to block submission.
#[component]
pub fn NumberField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<f64>,
    on_value: Callback<f64>,
    invalid: RwSignal<bool>,
) -> impl IntoView {
    let raw = RwSignal::new(value.get_untracked().to_string());

    // Follow outside resets (e.g. the form being cleared after a submit)
    Effect::new(move |_| {
        let current = value.get();
        let shown = raw.get_untracked();
        if parse_decimal(&shown).ok() != Some(current) {
            raw.set(current.to_string());
            invalid.set(false);
        }
    });

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                inputmode="decimal"
                id=id
                class="form-group__input"
                class:form-group__input--invalid=move || invalid.get()
                prop:value=move || raw.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    match parse_decimal(&text) {
                        Ok(v) => {
                            invalid.set(false);
                            on_value.run(v);
                        }
                        Err(e) => {
                            log::debug!("{id}: {e}");
                            invalid.set(true);
                        }
                    }
                    raw.set(text);
                }
            />
            <Show when=move || invalid.get()>
                <div class="form-group__error">"Enter a number"</div>
            </Show>
        </div>
    }
}
