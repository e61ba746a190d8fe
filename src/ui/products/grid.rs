use leptos::prelude::*;

use crate::core::{Catalog, EntrancePreset, EntranceTransition, Product};
use crate::ui::products::card::ProductCard;
use crate::ui::reveal::Reveal;

/// Renders every catalog product; selection is reported upward only
#[component]
pub fn ProductGrid(catalog: &'static Catalog, on_select: Callback<Product>) -> impl IntoView {
    let transition = EntranceTransition::new(EntrancePreset::PopUp).stagger(80);

    view! {
        <div class="grid grid-cols-2 gap-4 sm:gap-6 md:grid-cols-3 lg:grid-cols-4">
            {catalog
                .iter()
                .enumerate()
                .map(|(index, product)| {
                    view! {
                        <Reveal transition=transition index=index>
                            <ProductCard product=product.clone() on_select=on_select />
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}
