use leptos::prelude::*;

use crate::core::content::{MAP_EMBED_URL, contact_details};
use crate::core::{ContactForm, ContactSubject, EntrancePreset, EntranceTransition, Field, FormErrors};
use crate::ui::common::{
    FormField, SelectField, Spinner, SpinnerSize, SuccessDialog, TextAreaField, bind_text,
    error_for,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::Reveal;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let submitting = RwSignal::new(false);
    let show_success = RwSignal::new(false);

    let (name, on_name) = bind_text(form, |f| &f.name, |f, v| f.name = v);
    let (email, on_email) = bind_text(form, |f| &f.email, |f, v| f.email = v);
    let (phone, on_phone) = bind_text(form, |f| &f.phone, |f, v| f.phone = v);
    let (subject, on_subject) = bind_text(form, |f| &f.subject, |f, v| f.subject = v);
    let (message, on_message) = bind_text(form, |f| &f.message, |f, v| f.message = v);

    let subject_options = ContactSubject::ALL
        .iter()
        .map(|s| (s.value().to_string(), s.to_string()))
        .collect::<Vec<_>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        match form.with_untracked(ContactForm::validate) {
            Ok(submission) => {
                errors.set(FormErrors::new());
                submitting.set(true);

                #[cfg(not(feature = "ssr"))]
                {
                    use crate::core::contact::SUBMIT_DELAY_MS;
                    use gloo_timers::future::TimeoutFuture;
                    use wasm_bindgen_futures::spawn_local;

                    spawn_local(async move {
                        TimeoutFuture::new(SUBMIT_DELAY_MS as u32).await;
                        if let Ok(payload) = serde_json::to_string(&submission) {
                            leptos::logging::log!("Contact form submitted: {}", payload);
                        }
                        submitting.set(false);
                        form.set(ContactForm::default());
                        show_success.set(true);
                    });
                }

                #[cfg(feature = "ssr")]
                {
                    let _ = submission;
                }
            }
            Err(validation) => errors.set(validation),
        }
    };

    let header = EntranceTransition::new(EntrancePreset::FadeUp);
    let details = EntranceTransition::new(EntrancePreset::FadeRight);
    let form_panel = EntranceTransition::new(EntrancePreset::FadeLeft).delay(150);

    view! {
        <section id="contact" class="bg-gradient-to-b from-white to-brand-cream/20 py-16 sm:py-20 md:py-32">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal transition=header class="mx-auto mb-12 max-w-3xl text-center sm:mb-16">
                    <h2 class="mb-4 font-heading text-2xl font-bold sm:mb-6 sm:text-3xl md:text-4xl">
                        "Get in "<span class="text-brand-green">"Touch"</span>" With Us"
                    </h2>
                    <p class="px-4 text-base text-muted sm:text-lg">
                        "Have questions about our products or interested in placing an order? Our team is here to help you with all your rice-related inquiries."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 gap-8 lg:grid-cols-5 lg:gap-10">
                    <Reveal transition=details class="space-y-6 lg:col-span-2">
                        <div class="rounded-xl bg-white p-6 shadow-md sm:p-8">
                            <h3 class="mb-6 font-heading text-xl font-semibold sm:text-2xl">"Contact Information"</h3>
                            <div class="space-y-6">
                                {contact_details()
                                    .into_iter()
                                    .map(|detail| {
                                        view! {
                                            <div class="flex items-start gap-4">
                                                <div class="flex h-10 w-10 shrink-0 items-center justify-center rounded-full bg-brand-green/10">
                                                    <Icon name=detail.icon class="w-5 h-5"/>
                                                </div>
                                                <div>
                                                    <h4 class="text-sm font-medium sm:text-base">{detail.title}</h4>
                                                    <p class="mt-1 text-sm text-muted sm:text-base">{detail.details}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="h-64 overflow-hidden rounded-xl shadow-md sm:h-80">
                            {leptos::html::iframe()
                                .src(MAP_EMBED_URL)
                                .title("Annadaata Agro Industries location")
                                .class("h-full w-full border-0")
                                .attr("loading", "lazy")
                                .referrerpolicy("no-referrer-when-downgrade")
                                .allowfullscreen(true)}
                        </div>
                    </Reveal>

                    <Reveal transition=form_panel class="lg:col-span-3">
                        <div class="rounded-xl bg-white p-6 shadow-md sm:p-8">
                            <h3 class="mb-6 font-heading text-xl font-semibold sm:text-2xl">"Send Us a Message"</h3>
                            <form class="space-y-6" novalidate=true on:submit=on_submit>
                                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2">
                                    <FormField
                                        id="contact-name"
                                        label="Your Name"
                                        placeholder="Enter your name"
                                        value=name
                                        on_input=on_name
                                        disabled=submitting
                                        error=error_for(errors, Field::Name)
                                    />
                                    <FormField
                                        id="contact-email"
                                        label="Email Address"
                                        input_type="email"
                                        placeholder="Enter your email"
                                        value=email
                                        on_input=on_email
                                        disabled=submitting
                                        error=error_for(errors, Field::Email)
                                    />
                                </div>
                                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2">
                                    <FormField
                                        id="contact-phone"
                                        label="Phone Number (Optional)"
                                        input_type="tel"
                                        placeholder="Enter your phone number"
                                        value=phone
                                        on_input=on_phone
                                        disabled=submitting
                                    />
                                    <SelectField
                                        id="contact-subject"
                                        label="Subject"
                                        placeholder="Select a subject"
                                        value=subject
                                        on_change=on_subject
                                        options=subject_options
                                        disabled=submitting
                                        error=error_for(errors, Field::Subject)
                                    />
                                </div>
                                <TextAreaField
                                    id="contact-message"
                                    label="Message"
                                    placeholder="Write your message here..."
                                    rows=5
                                    value=message
                                    on_input=on_message
                                    disabled=submitting
                                />
                                <div class="pt-2">
                                    <button
                                        type="submit"
                                        class="btn-primary w-full sm:w-auto"
                                        disabled=move || submitting.get()
                                    >
                                        <Show
                                            when=move || submitting.get()
                                            fallback=|| view! {
                                                <Icon name=icons::SEND class="mr-2 w-4 h-4"/>
                                                "Send Message"
                                            }
                                        >
                                            <Spinner size=SpinnerSize::Small class="mr-2".to_string() label="Sending" />
                                            "Sending..."
                                        </Show>
                                    </button>
                                </div>
                            </form>
                        </div>
                    </Reveal>
                </div>
            </div>

            <SuccessDialog
                title="Message Sent Successfully!".to_string()
                message="Thank you for reaching out. Our team will get back to you as soon as possible.".to_string()
                is_open=show_success.into()
                on_close=Callback::new(move |_| show_success.set(false))
            />
        </section>
    }
}
