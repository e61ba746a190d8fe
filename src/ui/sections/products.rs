use leptos::prelude::*;

use crate::core::{EntrancePreset, EntranceTransition, Product, rice_catalog};
use crate::ui::dialogs::use_inquiry_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::products::{Lightbox, ProductGrid};
use crate::ui::reveal::Reveal;

/// Catalog grid; clicking a card opens the lightbox on that product
#[component]
pub fn ProductsSection() -> impl IntoView {
    let inquiry = use_inquiry_context();
    let catalog = rice_catalog();

    let selected = RwSignal::new(None::<Product>);
    let lightbox_open = RwSignal::new(false);

    let on_select = Callback::new(move |product: Product| {
        selected.set(Some(product));
        lightbox_open.set(true);
    });

    let on_open_change = Callback::new(move |open: bool| lightbox_open.set(open));

    let heading = EntranceTransition::new(EntrancePreset::FadeUp);

    view! {
        <section
            id="products"
            class="relative overflow-hidden bg-gradient-to-b from-white to-brand-cream/10 py-20 md:py-32"
        >
            <div class="absolute top-0 left-0 h-96 w-96 -translate-x-1/2 -translate-y-1/2 rounded-full bg-brand-green/5 blur-3xl"></div>
            <div class="absolute right-0 bottom-0 h-96 w-96 translate-x-1/2 translate-y-1/2 rounded-full bg-brand-gold/5 blur-3xl"></div>

            <div class="container relative z-10 mx-auto px-4">
                <Reveal transition=heading class="mx-auto mb-16 max-w-3xl text-center md:mb-20">
                    <h2 class="mb-6 font-heading text-4xl font-bold md:text-5xl lg:text-6xl">
                        "Premium "<span class="text-brand-green">"Rice"</span>" Collection"
                    </h2>
                    <p class="text-lg text-muted md:text-xl">
                        "Discover our exquisite range of premium rice varieties, each carefully selected and processed to deliver exceptional quality and taste."
                    </p>
                </Reveal>

                <ProductGrid catalog=catalog on_select=on_select />

                <Reveal transition=heading class="mt-12 text-center md:mt-16">
                    <button
                        type="button"
                        class="btn-primary btn-lg group"
                        on:click=move |_| inquiry.open(None)
                    >
                        "Enquire Now"
                        <Icon name=icons::CHEVRON_RIGHT class="ml-2 w-5 h-5 transition-transform duration-300 group-hover:translate-x-1"/>
                    </button>
                </Reveal>
            </div>

            <Lightbox
                catalog=catalog
                product=selected
                open=lightbox_open
                on_open_change=on_open_change
            />
        </section>
    }
}
