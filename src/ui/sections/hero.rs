use leptos::prelude::*;

use crate::core::content::HERO_STATS;
use crate::core::{EntrancePreset, EntranceTransition};
use crate::ui::dialogs::use_inquiry_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{scroll_to_section, use_motion_context};
use crate::ui::reveal::Reveal;

#[component]
pub fn Hero() -> impl IntoView {
    let inquiry = use_inquiry_context();
    let motion = use_motion_context();

    // Headline copy plays as one staggered sequence on load
    let copy = EntranceTransition::new(EntrancePreset::FadeUp).stagger(150);
    let image = EntranceTransition::new(EntrancePreset::ImageReveal)
        .duration(1500)
        .delay(300);
    let stats = EntranceTransition::new(EntrancePreset::FadeUp).trigger_offset(100);

    let view_products = move |_| scroll_to_section("products", !motion.reduced.get_untracked());

    view! {
        <section id="hero" class="relative flex min-h-screen flex-col justify-center">
            <div class="grain-overlay absolute inset-0 -z-10 bg-brand-cream/30"></div>
            <div class="container mx-auto flex flex-grow flex-col justify-center px-4 pt-20 sm:pt-[90px] md:pt-[100px]">
                <div class="grid grid-cols-1 items-center gap-8 md:gap-12 lg:grid-cols-2 lg:gap-16">
                    <div class="order-2 space-y-4 md:space-y-6 lg:order-1">
                        <Reveal transition=copy index=0 immediate=true>
                            <p class="mb-2 font-accent text-sm text-brand-green-dark sm:text-base md:mb-3 md:text-lg">
                                "Premium Rice Manufacturers"
                            </p>
                        </Reveal>
                        <Reveal transition=copy index=1 immediate=true>
                            <h1 class="mb-4 font-heading text-2xl font-bold leading-tight sm:text-3xl md:mb-6 md:text-4xl lg:text-5xl xl:text-6xl">
                                "Quality Begins in Our "
                                <span class="text-brand-green">"Mill"</span>
                                ", Ends on Your "
                                <span class="text-brand-gold">"Plate"</span>
                            </h1>
                        </Reveal>
                        <Reveal transition=copy index=2 immediate=true>
                            <p class="max-w-xl text-sm text-muted sm:text-base md:text-lg">
                                "Discover our premium range of rice varieties, processed with state-of-the-art technology and backed by decades of expertise in rice manufacturing. From farm to packaging, we ensure the highest quality standards."
                            </p>
                        </Reveal>
                        <Reveal
                            transition=copy
                            index=3
                            immediate=true
                            class="flex flex-col gap-3 pt-2 sm:flex-row md:gap-4 md:pt-4"
                        >
                            <button type="button" class="btn-primary btn-lg group" on:click=view_products>
                                "View Our Products"
                                <Icon name=icons::CHEVRON_RIGHT class="ml-1 w-4 h-4 transition-transform duration-300 group-hover:translate-x-1"/>
                            </button>
                            <button type="button" class="btn-outline btn-lg" on:click=move |_| inquiry.open(None)>
                                "Contact Us"
                            </button>
                        </Reveal>
                        <Reveal
                            transition=copy
                            index=4
                            immediate=true
                            class="flex items-center gap-2 text-sm text-muted"
                        >
                            <Icon name=icons::SHIELD class="w-4 h-4"/>
                            <p class="font-medium">
                                "ISO 22000:2018 Certified for Food Safety Management System"
                            </p>
                        </Reveal>
                    </div>

                    <div class="relative order-1 h-[280px] sm:h-[350px] md:h-[400px] lg:order-2 lg:h-[500px] xl:h-[550px]">
                        <Reveal
                            transition=image
                            immediate=true
                            class="absolute inset-0 overflow-hidden rounded-xl shadow-lg md:rounded-2xl md:shadow-xl"
                        >
                            <img
                                src="/images/hero.webp"
                                alt="Premium Rice Manufacturing"
                                fetchpriority="high"
                                class="h-full w-full object-cover"
                            />
                        </Reveal>
                        <div class="absolute -top-4 -right-4 hidden h-16 w-16 rounded-full bg-brand-gold/10 sm:block md:-top-6 md:-right-6 md:h-20 md:w-20 lg:h-24 lg:w-24"></div>
                        <div class="absolute -bottom-6 left-8 hidden h-14 w-14 rounded-full bg-brand-green/10 sm:block md:-bottom-8 md:left-12 md:h-16 md:w-16 lg:h-20 lg:w-20"></div>
                    </div>
                </div>
            </div>

            <Reveal transition=stats class="mt-12 bg-brand-green py-6 text-white sm:mt-16 md:mt-20 md:py-8">
                <div class="container mx-auto px-4">
                    <div class="grid grid-cols-2 gap-4 text-center md:grid-cols-4 md:gap-6">
                        {HERO_STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="space-y-1">
                                        <p class="font-heading text-2xl font-bold md:text-3xl">{*value}</p>
                                        <p class="text-xs text-white/80 md:text-sm">{*label}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Reveal>
        </section>
    }
}
