use leptos::prelude::*;

/// Controlled checkbox: the checked state comes from the caller's state,
/// a click only reports the request to toggle.
#[component]
pub fn FilterCheckbox(
    /// ID for the input element
    #[prop(into)]
    id: String,
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Toggle handler
    on_toggle: Callback<()>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let label_for = id.clone();
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <div class="form__checkbox-wrapper" class:form__checkbox-wrapper--disabled=is_disabled>
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=is_disabled
                on:change=move |_| on_toggle.run(())
            />
            <label class="form__checkbox-label" for=label_for>
                {label}
            </label>
        </div>
    }
}
