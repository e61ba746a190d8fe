use leptos::prelude::*;

use crate::core::content::NAV_ITEMS;
use crate::ui::dialogs::use_inquiry_context;
use crate::ui::hooks::{use_is_mobile, use_scrolled_past};
use crate::ui::icon::{Icon, icons};

/// Scroll offset after which the header turns opaque (px)
const SCROLLED_OFFSET: f64 = 20.0;

#[component]
pub fn Header() -> impl IntoView {
    let inquiry = use_inquiry_context();
    let scrolled = use_scrolled_past(SCROLLED_OFFSET);
    let is_mobile = use_is_mobile();
    let (menu_open, set_menu_open) = signal(false);

    // The sheet only exists on small screens
    Effect::new(move |_| {
        if !is_mobile.get() {
            set_menu_open.set(false);
        }
    });

    let nav_links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let class = if mobile { "nav-link-mobile" } else { "nav-link" };
                view! {
                    <a href=item.href class=class on:click=move |_| set_menu_open.set(false)>
                        {item.name}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header
            class="site-header fixed z-50 w-full h-16 sm:h-[72px] md:h-20 transition-all duration-300"
            class:site-header-scrolled=move || scrolled.get()
        >
            <div class="container mx-auto flex h-full items-center justify-between px-4">
                <a href="/" class="flex items-center gap-2">
                    <img
                        src="/images/logo.png"
                        alt="Annadaata Agro Industries"
                        width="40"
                        height="40"
                        class="logo-tint h-[30px] w-[30px] sm:h-[35px] sm:w-[35px] md:h-10 md:w-10"
                    />
                    <span class="font-heading text-lg font-bold text-brand-green sm:text-xl md:text-2xl">
                        "Annadaata "<span class="text-brand-gold">"Agro Industries"</span>
                    </span>
                </a>

                <nav class="hidden gap-1 md:flex" aria-label="Main">
                    {nav_links(false)}
                </nav>

                <div class="hidden md:block">
                    <button type="button" class="btn-primary btn-sm" on:click=move |_| inquiry.open(None)>
                        "Get a Quote"
                    </button>
                </div>

                <button
                    type="button"
                    class="rounded-md p-2 md:hidden"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <Icon name=icons::MENU class="w-6 h-6"/>
                </button>
            </div>

            // Mobile sheet
            <div
                class="mobile-sheet-backdrop md:hidden"
                class:mobile-sheet-open=move || menu_open.get()
                on:click=move |_| set_menu_open.set(false)
            ></div>
            <aside
                class="mobile-sheet md:hidden"
                class:mobile-sheet-open=move || menu_open.get()
                aria-hidden=move || (!menu_open.get()).to_string()
            >
                <div class="flex items-center justify-between border-b px-6 py-4">
                    <span class="font-heading text-lg">"Navigation Menu"</span>
                    <button
                        type="button"
                        aria-label="Close menu"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>
                <nav class="flex flex-1 flex-col overflow-y-auto">
                    {nav_links(true)}
                </nav>
                <div class="mt-auto border-t p-6">
                    <button
                        type="button"
                        class="btn-primary w-full"
                        on:click=move |_| {
                            set_menu_open.set(false);
                            inquiry.open(None);
                        }
                    >
                        "Get a Quote"
                    </button>
                </div>
            </aside>
        </header>
    }
}
