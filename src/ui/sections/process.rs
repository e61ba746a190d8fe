use leptos::prelude::*;

use crate::core::content::{PROCESS_STEPS, ProcessStep, QUALITY_PILLARS};
use crate::core::{EntrancePreset, EntranceTransition};
use crate::ui::icon::Icon;
use crate::ui::reveal::Reveal;

/// Steps per row on wide screens
const ROW_LEN: usize = 3;

#[component]
fn ProcessCard(step: ProcessStep, index: usize) -> impl IntoView {
    let last_in_row = (index + 1) % ROW_LEN == 0;
    let last_item = index + 1 == PROCESS_STEPS.len();
    let second_row = index >= ROW_LEN;

    view! {
        <div class="process-card group relative h-full overflow-hidden rounded-2xl border border-stone-100 bg-white p-7 transition-all duration-300 hover:border-brand-green/30 md:p-8">
            <span
                aria-hidden="true"
                class="pointer-events-none absolute -right-1 -bottom-3 select-none font-heading text-[96px] font-black leading-none text-stone-100 transition-colors duration-500"
            >
                {step.step}
            </span>
            <div class=format!(
                "absolute top-0 right-0 left-0 h-[3px] opacity-0 transition-opacity duration-300 group-hover:opacity-100 {}",
                step.accent.bar_class(),
            )></div>

            <div class="relative z-10 mb-5 flex items-center justify-between">
                <div class=format!(
                    "flex h-11 w-11 items-center justify-center rounded-xl transition-all duration-300 group-hover:scale-110 {}",
                    step.accent.icon_class(),
                )>
                    <Icon name=step.icon class="w-5 h-5"/>
                </div>
                <div class=format!(
                    "flex items-center gap-1.5 rounded-full border px-2.5 py-1 {}",
                    step.accent.label_class(),
                )>
                    <span class=format!(
                        "flex h-4 w-4 shrink-0 items-center justify-center rounded-full text-[9px] font-black leading-none text-white {}",
                        step.accent.bar_class(),
                    )>
                        {step.number()}
                    </span>
                    <span class="font-accent text-[11px] font-semibold tracking-wide">
                        {format!("Step {}", step.step)}
                    </span>
                </div>
            </div>

            <div class="relative z-10">
                <h3 class="mb-2.5 font-heading text-[17px] font-bold leading-snug transition-colors duration-300 group-hover:text-brand-green">
                    {step.title}
                </h3>
                <p class="text-sm leading-relaxed text-muted">{step.description}</p>
            </div>

            {(!last_in_row && !last_item).then(|| view! {
                <span aria-hidden="true" class="process-connector process-connector-right hidden lg:block"></span>
            })}
            {(last_in_row && !second_row).then(|| view! {
                <span aria-hidden="true" class="process-connector process-connector-down hidden lg:block"></span>
            })}
        </div>
    }
}

#[component]
pub fn Process() -> impl IntoView {
    let header = EntranceTransition::new(EntrancePreset::FadeUp);
    let cards = EntranceTransition::new(EntrancePreset::FadeUp).stagger(100);
    let banner = EntranceTransition::new(EntrancePreset::PopUp);

    view! {
        <section id="process" class="process-section relative overflow-hidden bg-stone-50 py-20 md:py-32">
            <div class="container relative z-10 mx-auto px-4">
                <Reveal transition=header class="mx-auto mb-16 max-w-2xl text-center md:mb-20">
                    <div class="mb-5 inline-flex items-center gap-2 rounded-full border border-brand-green/20 bg-brand-green/10 px-3.5 py-1.5 font-accent text-[11px] font-bold uppercase tracking-[0.15em] text-brand-green">
                        <span class="inline-block h-1.5 w-1.5 rounded-full bg-brand-green"></span>
                        "Our Process"
                    </div>
                    <h2 class="mb-5 font-heading text-4xl font-bold leading-tight md:text-5xl lg:text-6xl">
                        "From "<span class="text-brand-green">"Fields"</span>" to "
                        <span class="text-brand-gold">"Tables"</span>
                    </h2>
                    <p class="text-lg leading-relaxed text-muted">
                        "Six rigorously monitored stages, from seed selection to your doorstep, ensuring every grain carries our uncompromising standard of quality."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 md:gap-5 lg:grid-cols-3">
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <Reveal transition=cards index=index>
                                    <ProcessCard step=*step index=index />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal transition=banner class="relative mt-12 overflow-hidden rounded-2xl bg-brand-green-dark md:mt-16">
                    <div class="relative z-10 px-7 py-9 md:px-12 md:py-11">
                        <div class="grid grid-cols-1 items-center gap-8 md:grid-cols-[1fr_2fr] md:gap-16">
                            <div>
                                <p class="mb-3 font-accent text-[11px] font-semibold uppercase tracking-[0.18em] text-brand-gold/70">
                                    "Our Commitment"
                                </p>
                                <h3 class="font-heading text-2xl font-bold leading-tight text-white md:text-3xl">
                                    "Quality at Every Stage"
                                </h3>
                                <p class="mt-3 max-w-xs text-sm leading-relaxed text-white/50">
                                    "Rigorous standards applied from the very first grain to the final sealed pack."
                                </p>
                            </div>
                            <div class="grid grid-cols-1 gap-6 sm:grid-cols-3">
                                {QUALITY_PILLARS
                                    .iter()
                                    .map(|pillar| {
                                        view! {
                                            <div class="flex items-start gap-3.5">
                                                <div class="mt-0.5 flex h-10 w-10 shrink-0 items-center justify-center rounded-xl border border-white/10 bg-white/10">
                                                    <Icon name=pillar.icon class="w-5 h-5"/>
                                                </div>
                                                <div>
                                                    <p class="font-accent text-sm font-semibold leading-tight text-white">
                                                        {pillar.label}
                                                    </p>
                                                    <p class="mt-1 text-xs leading-snug text-white/45">{pillar.sub}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
