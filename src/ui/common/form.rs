use crate::core::{Field, FormErrors};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Value signal and input callback for one text field of a form struct
pub fn bind_text<F>(
    form: RwSignal<F>,
    get: fn(&F) -> &String,
    set: fn(&mut F, String),
) -> (Signal<String>, Callback<String>)
where
    F: Send + Sync + 'static,
{
    (
        Signal::derive(move || form.with(|f| get(f).clone())),
        Callback::new(move |value| form.update(|f| set(f, value))),
    )
}

/// Error message signal for `field`
pub fn error_for(errors: RwSignal<FormErrors>, field: Field) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.message(field)))
}

/// Error line rendered under an input
#[component]
fn FieldErrorLine(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.as_ref().and_then(|e| e.get()).map(|err| view! {
            <p class="flex items-center gap-1 text-sm text-red-600" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                <span>{err}</span>
            </p>
        })
    }
}

/// Labelled input with an optional error line
#[component]
pub fn FormField(
    /// Element id, also used by the label
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_error = move || error.as_ref().and_then(|e| e.get()).is_some();

    view! {
        <div class="space-y-1.5">
            <label for=id class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="input-base"
                class:input-error=has_error
                aria-invalid=move || has_error().to_string()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldErrorLine error=error />
        </div>
    }
}

/// Labelled textarea with an optional error line
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 4)]
    rows: u32,
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_error = move || error.as_ref().and_then(|e| e.get()).is_some();

    view! {
        <div class="space-y-1.5">
            <label for=id class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                id=id
                name=id
                class="input-base resize-none"
                class:input-error=has_error
                aria-invalid=move || has_error().to_string()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldErrorLine error=error />
        </div>
    }
}

/// Labelled select; an empty first option acts as the placeholder
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "Select an option")]
    placeholder: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_error = move || error.as_ref().and_then(|e| e.get()).is_some();

    view! {
        <div class="space-y-1.5">
            <label for=id class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <select
                id=id
                name=id
                class="input-base"
                class:input-error=has_error
                aria-invalid=move || has_error().to_string()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="" disabled=true>{placeholder}</option>
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val>{text}</option>
                    }
                }).collect_view()}
            </select>
            <FieldErrorLine error=error />
        </div>
    }
}
