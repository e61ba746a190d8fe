use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Centered dialog over a dimmed backdrop
#[component]
pub fn BaseModal(
    /// Dialog title
    #[prop(into)]
    title: Signal<String>,
    /// Optional subtitle/description
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,
    /// Whether the dialog is open
    is_open: Signal<bool>,
    /// Callback to close the dialog
    on_close: Callback<()>,
    /// Dialog content
    children: Children,
    /// Maximum width class (default: max-w-md)
    #[prop(default = "max-w-md")]
    max_width: &'static str,
    /// Whether clicking the backdrop closes the dialog
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4 transition-opacity duration-300"
                } else {
                    "modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4 opacity-0 pointer-events-none transition-opacity duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(target) = e.target() {
                            if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                                if element.class_list().contains("modal-backdrop") {
                                    on_close.run(());
                                }
                            }
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            }
        >
            <div
                class=format!("relative w-full {} rounded-xl bg-white shadow-2xl transition-transform duration-300", max_width)
                class:scale-95=move || !is_open.get()
            >
                <button
                    type="button"
                    class="absolute top-4 right-4 p-1 rounded-full text-gray-500 hover:text-gray-800 hover:bg-gray-100 transition-colors"
                    on:click=move |_| on_close.run(())
                    aria-label="Close dialog"
                >
                    <Icon name=icons::X class="w-5 h-5"/>
                </button>

                <div class="p-6">
                    <div class="mb-4 pr-8">
                        <h3 class="text-xl font-heading font-semibold text-gray-900">{move || title.get()}</h3>
                        {subtitle.map(|s| view! { <p class="mt-1 text-sm text-muted">{move || s.get()}</p> })}
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Confirmation shown after a simulated submission
#[component]
pub fn SuccessDialog(
    /// Headline
    title: String,
    /// Body text
    message: String,
    /// Whether the dialog is open
    is_open: Signal<bool>,
    /// Callback when closed
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <BaseModal
            title=String::new()
            is_open=is_open
            on_close=on_close
        >
            <div class="text-center">
                <div class="mx-auto mb-4 flex h-16 w-16 items-center justify-center rounded-full bg-brand-green/10">
                    <Icon name=icons::CHECK_CIRCLE class="h-8 w-8"/>
                </div>
                <h4 class="mb-2 text-xl font-heading font-medium text-gray-900">{title}</h4>
                <p class="mb-6 text-muted">{message}</p>
                <button
                    type="button"
                    class="btn-primary"
                    on:click=move |_| on_close.run(())
                >
                    "Close"
                </button>
            </div>
        </BaseModal>
    }
}
