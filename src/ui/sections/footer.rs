use chrono::Datelike;
use leptos::prelude::*;

use crate::core::content::{FOOTER_BLURB, FOOTER_COLUMNS, SOCIAL_LINKS, copyright};
use crate::core::{EntrancePreset, EntranceTransition, NewsletterSignup};
use crate::ui::common::{Spinner, SpinnerSize, SuccessDialog};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{scroll_to_top, use_motion_context};
use crate::ui::reveal::Reveal;

const LEGAL_LINKS: [(&str, &str); 3] = [
    ("Privacy Policy", "/privacy-policy"),
    ("Terms of Service", "/terms"),
    ("Cookie Policy", "/cookies"),
];

#[component]
fn NewsletterForm(on_subscribed: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        match NewsletterSignup::parse(&email.get_untracked()) {
            Ok(signup) => {
                set_error.set(None);
                submitting.set(true);

                #[cfg(not(feature = "ssr"))]
                {
                    use crate::core::contact::SUBMIT_DELAY_MS;
                    use gloo_timers::future::TimeoutFuture;
                    use wasm_bindgen_futures::spawn_local;

                    spawn_local(async move {
                        TimeoutFuture::new(SUBMIT_DELAY_MS as u32).await;
                        leptos::logging::log!("Newsletter subscription for: {}", signup.email);
                        submitting.set(false);
                        set_email.set(String::new());
                        on_subscribed.run(());
                    });
                }

                #[cfg(feature = "ssr")]
                {
                    let _ = (signup, on_subscribed);
                }
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <form class="space-y-2" novalidate=true on:submit=on_submit>
            <div class="flex gap-2">
                <input
                    type="email"
                    name="newsletter-email"
                    aria-label="Email address"
                    placeholder="Your email address"
                    class="input-base input-dark flex-1"
                    class:input-error=move || error.with(Option::is_some)
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    disabled=move || submitting.get()
                />
                <button type="submit" class="btn-gold" disabled=move || submitting.get()>
                    <Show when=move || submitting.get() fallback=|| "Subscribe">
                        <Spinner size=SpinnerSize::Small label="Subscribing" />
                    </Show>
                </button>
            </div>
            {move || error.get().map(|err| view! {
                <p class="text-sm text-red-300" role="alert">{err}</p>
            })}
        </form>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let motion = use_motion_context();
    let show_success = RwSignal::new(false);
    let year = chrono::Utc::now().year();

    let columns = EntranceTransition::new(EntrancePreset::FadeUp).stagger(120);

    view! {
        <footer class="relative bg-brand-green-dark pt-16 pb-8 text-white">
            <div class="container mx-auto px-4">
                <div class="mb-12 grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-4">
                    <Reveal transition=columns index=0 class="lg:col-span-2">
                        <a href="/" class="mb-4 flex items-center gap-2">
                            <img src="/images/logo.png" alt="" width="40" height="40" class="h-10 w-10 invert"/>
                            <span class="font-heading text-2xl font-bold">
                                "Annadaata "<span class="text-brand-gold">"Agro Industries"</span>
                            </span>
                        </a>
                        <p class="mb-6 max-w-md text-white/80">{FOOTER_BLURB}</p>

                        <h4 class="mb-4 font-medium">"Follow Us"</h4>
                        <div class="mb-8 flex gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            aria-label=link.name
                                            class="flex h-9 w-9 items-center justify-center rounded-full border border-white/20 transition-colors hover:bg-white/10"
                                        >
                                            <Icon name=link.icon class="w-4 h-4"/>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <h4 class="mb-4 font-medium">"Subscribe to our Newsletter"</h4>
                        <NewsletterForm on_subscribed=Callback::new(move |_| show_success.set(true)) />
                    </Reveal>

                    {FOOTER_COLUMNS
                        .iter()
                        .enumerate()
                        .map(|(i, column)| {
                            view! {
                                <Reveal transition=columns index={i + 1}>
                                    <h4 class="mb-4 font-heading font-semibold">{column.title}</h4>
                                    <ul class="space-y-2">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href=link.href class="group flex items-center gap-1 text-white/70 transition-colors hover:text-white">
                                                            <Icon name=icons::CHEVRON_RIGHT class="w-3 h-3 transition-transform group-hover:translate-x-1"/>
                                                            <span>{link.name}</span>
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="h-px bg-white/20"></div>

                <div class="flex flex-col items-center justify-between pt-8 md:flex-row">
                    <p class="mb-4 text-sm text-white/70 md:mb-0">{copyright(year)}</p>
                    <div class="flex space-x-6">
                        {LEGAL_LINKS
                            .iter()
                            .map(|(name, href)| view! {
                                <a href=*href class="text-sm text-white/70 hover:text-white">{*name}</a>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-8 flex justify-center">
                    <button
                        type="button"
                        class="rounded-full border border-white/20 p-2 transition-colors hover:bg-white/10"
                        aria-label="Scroll to top"
                        on:click=move |_| scroll_to_top(!motion.reduced.get_untracked())
                    >
                        <Icon name=icons::ARROW_UP class="w-4 h-4"/>
                    </button>
                </div>
            </div>

            <SuccessDialog
                title="Successfully Subscribed!".to_string()
                message="Thank you for subscribing to our newsletter. You'll be the first to know about our latest updates and offers.".to_string()
                is_open=show_success.into()
                on_close=Callback::new(move |_| show_success.set(false))
            />
        </footer>
    }
}
