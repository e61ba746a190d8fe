use leptos::html;
use leptos::prelude::*;

use crate::core::content::{ABOUT_PARAGRAPHS, ABOUT_STATS, FOUNDED_YEAR, Stat};
use crate::core::{EntrancePreset, EntranceTransition, RICE_BLUR_PLACEHOLDER};
use crate::ui::hooks::{InViewOptions, use_count_up, use_in_view};
use crate::ui::motion::use_motion_context;
use crate::ui::reveal::Reveal;

/// Count-up length for the legacy figures (ms)
const COUNT_UP_MS: u32 = 2200;

const STAT_ACCENTS: [(&str, &str); 3] = [
    ("bg-brand-green", "text-brand-green"),
    ("bg-brand-gold", "text-brand-gold"),
    ("bg-brand-green", "text-brand-green"),
];

#[component]
fn StatCounter(stat: Stat, index: usize, start: Signal<bool>) -> impl IntoView {
    let motion = use_motion_context();
    let value = use_count_up(stat.value, COUNT_UP_MS, start, motion.reduced.into());
    let (accent, color) = STAT_ACCENTS[index % STAT_ACCENTS.len()];

    let spacing = match index {
        0 => "pr-6",
        1 => "border-l pl-6 pr-6",
        _ => "border-l pl-6",
    };

    view! {
        <div class=format!("stat-card group py-2 {}", spacing)>
            <div class=format!("mb-4 h-[3px] w-8 rounded-full transition-all duration-300 group-hover:w-12 {}", accent)></div>
            <div class="mb-2 flex items-baseline gap-0.5 leading-none">
                <span class=format!("font-heading text-5xl font-black tabular-nums md:text-6xl {}", color)>
                    {move || value.get()}
                </span>
                <span class=format!("font-heading text-2xl font-bold md:text-3xl {}", color)>
                    {stat.suffix}
                </span>
            </div>
            <p class="whitespace-pre-line font-accent text-[11px] font-semibold uppercase leading-snug tracking-[0.14em] text-muted">
                {stat.label}
            </p>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let stats_ref = NodeRef::<html::Div>::new();
    let stats_visible = use_in_view(stats_ref, InViewOptions::default());

    let image = EntranceTransition::new(EntrancePreset::FadeRight);
    let content = EntranceTransition::new(EntrancePreset::FadeLeft).delay(150);

    view! {
        <section id="about" class="bg-gradient-to-b from-brand-cream/20 to-white py-20 md:py-32">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 items-center gap-12 lg:grid-cols-2 lg:gap-16">
                    <Reveal transition=image class="relative">
                        <div class="relative z-10 overflow-hidden rounded-2xl bg-white p-4 shadow-xl">
                            <div
                                class="relative aspect-[4/3] overflow-hidden rounded-xl bg-cream"
                                style=format!("background-image: url('{}'); background-size: cover;", RICE_BLUR_PLACEHOLDER)
                            >
                                <img
                                    src="/images/hero.webp"
                                    alt="Annadaata Rice Manufacturing Facility"
                                    loading="lazy"
                                    sizes="(max-width: 1024px) 100vw, 50vw"
                                    class="h-full w-full object-cover"
                                />
                            </div>
                        </div>
                        <div class="absolute -right-6 -bottom-6 -z-10 h-64 w-64 rounded-xl bg-brand-green/10"></div>
                    </Reveal>

                    <Reveal transition=content class="space-y-8">
                        <div>
                            <h4 class="mb-2 font-accent tracking-wider text-brand-green">"OUR LEGACY"</h4>
                            <h2 class="mb-6 font-heading text-3xl font-bold leading-tight md:text-4xl lg:text-5xl">
                                "Crafting Premium Rice Since "
                                <span class="text-brand-gold">{FOUNDED_YEAR}</span>
                            </h2>
                            <div class="space-y-4 text-muted">
                                {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                            </div>
                        </div>

                        <div node_ref=stats_ref>
                            <div class="mb-8 h-px bg-gray-200"></div>
                            <div class="grid grid-cols-3">
                                {ABOUT_STATS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, stat)| {
                                        view! {
                                            <StatCounter stat=*stat index=index start=stats_visible.into() />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
