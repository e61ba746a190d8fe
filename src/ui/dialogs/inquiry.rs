//! Product inquiry dialog
//!
//! One dialog instance is mounted per page; any "Enquire" / "Get a Quote"
//! control opens it through [`InquiryContext`].

use leptos::prelude::*;

use crate::core::format::tel_href;
use crate::core::seo::COMPANY;
use crate::core::{Field, FormErrors, InquiryForm};
use crate::ui::common::{BaseModal, FormField, TextAreaField, bind_text, error_for};
use crate::ui::icon::{Icon, icons};

/// Shared open state of the inquiry dialog
#[derive(Clone, Copy)]
pub struct InquiryContext {
    pub is_open: RwSignal<bool>,
    /// Product the visitor asked about, if any
    pub product: RwSignal<Option<String>>,
}

impl InquiryContext {
    pub fn open(&self, product: Option<String>) {
        self.product.set(product);
        self.is_open.set(true);
    }

    pub fn close(&self) {
        self.is_open.set(false);
    }
}

pub fn provide_inquiry_context() -> InquiryContext {
    let ctx = InquiryContext {
        is_open: RwSignal::new(false),
        product: RwSignal::new(None),
    };
    provide_context(ctx);
    ctx
}

pub fn use_inquiry_context() -> InquiryContext {
    use_context::<InquiryContext>().expect("InquiryContext should be provided")
}

#[component]
pub fn InquiryDialog() -> impl IntoView {
    let ctx = use_inquiry_context();

    let form = RwSignal::new(InquiryForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let submitted = RwSignal::new(false);

    let (name, on_name) = bind_text(form, |f| &f.name, |f, v| f.name = v);
    let (phone, on_phone) = bind_text(form, |f| &f.phone, |f, v| f.phone = v);
    let (email, on_email) = bind_text(form, |f| &f.email, |f, v| f.email = v);
    let (message, on_message) = bind_text(form, |f| &f.message, |f, v| f.message = v);

    let title = Signal::derive(move || {
        if submitted.get() {
            String::new()
        } else {
            "Product Inquiry".to_string()
        }
    });
    let subtitle = Signal::derive(move || {
        if submitted.get() {
            return String::new();
        }
        match ctx.product.get() {
            Some(product) => format!("Inquire about {}", product),
            None => "Contact us for more information".to_string(),
        }
    });

    let on_close = Callback::new(move |_| {
        ctx.close();
        errors.set(FormErrors::new());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let product = ctx.product.get_untracked();
        match form.with_untracked(|f| f.validate(product.as_deref())) {
            Ok(inquiry) => {
                if let Ok(payload) = serde_json::to_string(&inquiry) {
                    leptos::logging::log!("Product inquiry submitted: {}", payload);
                }
                errors.set(FormErrors::new());
                submitted.set(true);

                #[cfg(not(feature = "ssr"))]
                {
                    use crate::core::contact::{INQUIRY_AUTO_CLOSE_MS, RESET_DELAY_MS};
                    use gloo_timers::future::TimeoutFuture;
                    use wasm_bindgen_futures::spawn_local;

                    spawn_local(async move {
                        TimeoutFuture::new(INQUIRY_AUTO_CLOSE_MS as u32).await;
                        ctx.close();
                        // Reset once the close transition is over
                        TimeoutFuture::new(RESET_DELAY_MS as u32).await;
                        submitted.set(false);
                        form.set(InquiryForm::default());
                    });
                }
            }
            Err(validation) => errors.set(validation),
        }
    };

    view! {
        <BaseModal
            title=title
            subtitle=subtitle
            is_open=ctx.is_open.into()
            on_close=on_close
        >
            <Show
                when=move || submitted.get()
                fallback=move || view! {
                    <form class="space-y-4" novalidate=true on:submit=on_submit>
                        <FormField
                            id="inquiry-name"
                            label="Name"
                            required=true
                            placeholder="Your name"
                            value=name
                            on_input=on_name
                            error=error_for(errors, Field::Name)
                        />
                        <FormField
                            id="inquiry-phone"
                            label="Phone Number"
                            required=true
                            input_type="tel"
                            placeholder="Your phone number"
                            value=phone
                            on_input=on_phone
                            error=error_for(errors, Field::Phone)
                        />
                        <FormField
                            id="inquiry-email"
                            label="Email"
                            required=true
                            input_type="email"
                            placeholder="Your email"
                            value=email
                            on_input=on_email
                            error=error_for(errors, Field::Email)
                        />
                        <TextAreaField
                            id="inquiry-message"
                            label="Your Message"
                            required=true
                            placeholder="Tell us about your requirements..."
                            value=message
                            on_input=on_message
                            error=error_for(errors, Field::Message)
                        />
                        <div class="flex gap-4 pt-4">
                            <button type="submit" class="btn-primary flex-1">
                                "Submit Inquiry"
                            </button>
                            <a href=tel_href(COMPANY.phones[0]) class="btn-outline">
                                <Icon name=icons::PHONE class="w-4 h-4"/>
                                "Call Now"
                            </a>
                        </div>
                    </form>
                }
            >
                <div class="inquiry-success py-8 text-center space-y-4">
                    <Icon name=icons::CHECK_CIRCLE class="w-16 h-16 mx-auto"/>
                    <h3 class="text-xl font-semibold text-brand-green">
                        "Thank You for Your Interest!"
                    </h3>
                    <p class="text-muted">
                        "We've received your inquiry and will reach out to you within 24 hours."
                    </p>
                </div>
            </Show>
        </BaseModal>
    }
}
