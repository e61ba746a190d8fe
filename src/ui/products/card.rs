use leptos::html;
use leptos::prelude::*;

use crate::core::{Product, ProductBadge, RICE_BLUR_PLACEHOLDER};
use crate::ui::hooks::is_image_ready;
use crate::ui::icon::{Icon, icons};

fn badge_class(badge: ProductBadge) -> &'static str {
    match badge {
        ProductBadge::Flagship => "badge badge-gold",
        ProductBadge::Popular => "badge badge-green",
    }
}

/// Grid card; the whole card activates on click, Enter or Space
#[component]
pub fn ProductCard(product: Product, on_select: Callback<Product>) -> impl IntoView {
    let (thumb_loaded, set_thumb_loaded) = signal(false);
    let thumb_ref = NodeRef::<html::Img>::new();

    // A cached thumbnail can finish before hydration, so its load event is never seen
    Effect::new(move |_| {
        if is_image_ready(thumb_ref) {
            set_thumb_loaded.set(true);
        }
    });

    let label = format!("View {} in full size", product.name);
    let badge = product.badge();
    let name = product.name.clone();
    let subtitle = product.subtitle.clone();
    let thumbnail = product.thumbnail.clone();
    let alt = product.name.clone();

    let product = StoredValue::new(product);
    let select = move || on_select.run(product.get_value());

    view! {
        <article
            class="product-card group"
            role="button"
            tabindex="0"
            aria-label=label
            on:click=move |_| select()
            on:keydown=move |ev| {
                let key = ev.key();
                if key == "Enter" || key == " " {
                    ev.prevent_default();
                    select();
                }
            }
        >
            <div
                class="relative aspect-[4/5] overflow-hidden rounded-t-xl bg-cream"
                style=format!("background-image: url('{}'); background-size: cover;", RICE_BLUR_PLACEHOLDER)
            >
                <img
                    node_ref=thumb_ref
                    src=thumbnail
                    alt=alt
                    loading="lazy"
                    decoding="async"
                    class="h-full w-full object-cover transition-all duration-500 group-hover:scale-105"
                    class:opacity-0=move || !thumb_loaded.get()
                    on:load=move |_| set_thumb_loaded.set(true)
                />
                {badge.map(|b| view! {
                    <span class=badge_class(b)>
                        <Icon name=icons::STAR class="w-3 h-3"/>
                        {b.to_string()}
                    </span>
                })}
                <div class="absolute inset-0 flex items-center justify-center bg-black/0 opacity-0 transition-all duration-300 group-hover:bg-black/30 group-hover:opacity-100">
                    <Icon name=icons::EXPAND class="w-8 h-8"/>
                </div>
            </div>
            <div class="p-4 text-center">
                <h3 class="font-heading text-lg font-semibold text-gray-900">{name}</h3>
                {subtitle.map(|s| view! { <p class="text-sm text-muted">{s}</p> })}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_classes_differ() {
        assert_ne!(
            badge_class(ProductBadge::Flagship),
            badge_class(ProductBadge::Popular)
        );
    }
}
