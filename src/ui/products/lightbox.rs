//! Product lightbox
//!
//! Thin reactive shell around [`LightboxSession`]: keys, swipes, arrows, dots
//! and the backdrop are all mapped onto [`LightboxCommand`]s, and the markup
//! is derived from whatever state the session ends up in.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;

use crate::core::format::tel_href;
use crate::core::seo::LIGHTBOX_CONTACT_PHONE;
use crate::core::{
    CLOSE_GRACE_MS, Catalog, CloseToken, CommandOutcome, DEFAULT_SWIPE_THRESHOLD, Direction,
    ImageState, ImageTicket, LightboxCommand, LightboxSession, Product, SwipeDetector,
};
use crate::ui::common::{Skeleton, Spinner, SpinnerSize};
use crate::ui::icon::{Icon, icons};

/// Class toggled on the caption to replay its entrance on every move
const CAPTION_ENTER_CLASS: &str = "lightbox-caption-enter";
/// Class toggled on the image to replay its entrance
const IMAGE_ENTER_CLASS: &str = "lightbox-image-enter";

#[cfg(not(feature = "ssr"))]
fn first_touch(ev: &leptos::ev::TouchEvent) -> Option<(f64, f64)> {
    ev.changed_touches()
        .get(0)
        .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
}

#[cfg(feature = "ssr")]
fn first_touch(_ev: &leptos::ev::TouchEvent) -> Option<(f64, f64)> {
    None
}

/// Ticket the `<img>` was rendering for when `ev` fired
#[cfg(not(feature = "ssr"))]
fn rendered_ticket(ev: &leptos::ev::Event) -> Option<ImageTicket> {
    use leptos::wasm_bindgen::JsCast;

    let img = ev.target()?.dyn_into::<leptos::web_sys::Element>().ok()?;
    let index = img.get_attribute("data-index")?.parse().ok()?;
    let generation = img.get_attribute("data-generation")?.parse().ok()?;
    Some(ImageTicket::new(index, generation))
}

#[cfg(feature = "ssr")]
fn rendered_ticket(_ev: &leptos::ev::Event) -> Option<ImageTicket> {
    None
}

/// Restart the entrance animations; true when `src` is already decoded
/// (cached, or the same src as before) and no load event will follow.
#[cfg(not(feature = "ssr"))]
fn replay_stage(image: NodeRef<html::Img>, caption: NodeRef<html::Div>, src: &str) -> bool {
    use crate::ui::hooks::image_decoded;
    use crate::ui::motion::replay_animation;

    if let Some(caption) = caption.get_untracked() {
        replay_animation(&caption, CAPTION_ENTER_CLASS);
    }
    match image.get_untracked() {
        Some(img) => {
            replay_animation(&img, IMAGE_ENTER_CLASS);
            img.src().ends_with(src) && image_decoded(img.complete(), img.natural_width())
        }
        None => false,
    }
}

#[cfg(feature = "ssr")]
fn replay_stage(_image: NodeRef<html::Img>, _caption: NodeRef<html::Div>, _src: &str) -> bool {
    false
}

/// Re-request the current src after a failure
#[cfg(not(feature = "ssr"))]
fn reload_image(image: NodeRef<html::Img>) {
    if let Some(img) = image.get_untracked() {
        let src = img.src();
        img.set_src(&src);
    }
}

#[cfg(feature = "ssr")]
fn reload_image(_image: NodeRef<html::Img>) {}

/// Full-size image with skeleton and failure states; replays its entrance
/// whenever the session issues a new image request.
#[component]
fn LightboxImage(
    session: RwSignal<LightboxSession<'static>>,
    caption_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let image_ref = NodeRef::<html::Img>::new();

    let ticket = Memo::new(move |_| session.with(|s| s.image_ticket()));
    let image_state = Memo::new(move |_| session.with(|s| s.image_state()));
    let product = Memo::new(move |_| session.with(|s| s.displayed_product().cloned()));

    Effect::new(move |_| {
        let ticket = ticket.get();
        let src = product.with_untracked(|p| p.as_ref().map(|p| p.image.clone()));
        if src.is_some_and(|src| replay_stage(image_ref, caption_ref, &src)) {
            session.try_update(|s| s.on_image_load(ticket));
        }
    });

    let on_load = move |ev: leptos::ev::Event| {
        if let Some(ticket) = rendered_ticket(&ev) {
            session.try_update(|s| s.on_image_load(ticket));
        }
    };

    let on_error = move |ev: leptos::ev::ErrorEvent| {
        let Some(ticket) = rendered_ticket(&ev) else {
            return;
        };
        if session.try_update(|s| s.on_image_error(ticket)).unwrap_or(false) {
            leptos::logging::warn!("Lightbox: failed to load image for index {}", ticket.index);
        }
    };

    let on_retry = move |_| {
        if session.try_update(|s| s.retry()).flatten().is_some() {
            reload_image(image_ref);
        }
    };

    view! {
        <div class="relative aspect-[4/5] w-full max-h-[70vh] overflow-hidden rounded-xl bg-black/40">
            <img
                node_ref=image_ref
                src=move || product.with(|p| p.as_ref().map(|p| p.image.clone()))
                alt=move || product.with(|p| p.as_ref().map(|p| p.name.clone()))
                data-index=move || ticket.get().index.to_string()
                data-generation=move || ticket.get().generation.to_string()
                class="lightbox-image absolute inset-0 h-full w-full object-contain"
                class:opacity-0=move || image_state.get() != ImageState::Loaded
                on:load=on_load
                on:error=on_error
            />

            <Show when=move || image_state.get() == ImageState::Loading>
                <div class="absolute inset-0 flex items-center justify-center">
                    <Skeleton class="absolute inset-0".to_string() />
                    <Spinner size=SpinnerSize::Large />
                </div>
            </Show>

            <Show when=move || image_state.get() == ImageState::Failed>
                <div class="absolute inset-0 flex flex-col items-center justify-center gap-3 text-white/80">
                    <Icon name=icons::IMAGE_OFF class="w-10 h-10"/>
                    <p>"Image could not be loaded"</p>
                    <button type="button" class="btn-outline" on:click=on_retry>
                        <Icon name=icons::REFRESH class="w-4 h-4"/>
                        "Retry"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Modal carousel over the whole catalog.
///
/// `product` is the card that was clicked; once open, the lightbox keeps its
/// own index and the parent only hears about close requests through
/// `on_open_change(false)`.
#[component]
pub fn Lightbox(
    catalog: &'static Catalog,
    #[prop(into)] product: Signal<Option<Product>>,
    #[prop(into)] open: Signal<bool>,
    on_open_change: Callback<bool>,
    /// Horizontal travel (px) a touch must cover to count as a swipe
    #[prop(default = DEFAULT_SWIPE_THRESHOLD)]
    swipe_threshold: f64,
) -> impl IntoView {
    let session = RwSignal::new(LightboxSession::new(catalog));
    let swipe = StoredValue::new(SwipeDetector::new(swipe_threshold));

    let is_open = Memo::new(move |_| session.with(|s| s.is_open()));
    let displayed = Memo::new(move |_| session.with(|s| s.displayed_product().cloned()));
    let current_index = Memo::new(move |_| session.with(|s| s.current_index()));
    let total = catalog.len();

    let schedule_finish = move |token: CloseToken| {
        set_timeout(
            move || {
                session.try_update(|s| s.finish_close(token));
            },
            Duration::from_millis(CLOSE_GRACE_MS),
        );
    };

    let dispatch = move |command: LightboxCommand| {
        let outcome = session
            .try_update(|s| s.apply(command))
            .unwrap_or(CommandOutcome::Ignored);
        if let CommandOutcome::Closed(token) = outcome {
            schedule_finish(token);
            on_open_change.run(false);
        }
    };

    let close = move || dispatch(LightboxCommand::Close);

    // Follow the controlled `open`/`product` props
    Effect::new(move |_| {
        let wants_open = open.get();
        let requested = product.get();

        match (wants_open, requested) {
            (true, Some(requested)) => {
                let opened = session.try_update(|s| s.open(&requested)).unwrap_or(false);
                if !opened {
                    leptos::logging::warn!("Lightbox: unknown product '{}'", requested.id);
                    on_open_change.run(false);
                }
            }
            (true, None) => on_open_change.run(false),
            (false, _) => {
                if let Some(Some(token)) = session.try_update(|s| s.close()) {
                    schedule_finish(token);
                }
            }
        }
    });

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::command_for_key;
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if !is_open.get_untracked() {
                return;
            }
            if let Some(command) = command_for_key(&ev.key()) {
                ev.prevent_default();
                dispatch(command);
            }
        });
        on_cleanup(move || drop(handle_keydown));

        // Lock page scroll while the overlay is up
        Effect::new(move |_| {
            let locked = is_open.get();
            if let Some(body) = leptos::web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let _ = if locked {
                    body.class_list().add_1("overflow-hidden")
                } else {
                    body.class_list().remove_1("overflow-hidden")
                };
            }
        });
    }

    let close_button_ref = NodeRef::<html::Button>::new();
    Effect::new(move |_| {
        if is_open.get() {
            if let Some(button) = close_button_ref.get() {
                let _ = button.focus();
            }
        }
    });

    let caption_ref = NodeRef::<html::Div>::new();

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some((x, y)) = first_touch(&ev) {
            swipe.update_value(|d| d.touch_start(x, y));
        }
    };

    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        let command = first_touch(&ev).and_then(|(x, y)| {
            let mut command = None;
            swipe.update_value(|d| command = d.touch_end(x, y));
            command
        });
        if let Some(command) = command {
            dispatch(command);
        }
    };

    let on_touch_cancel = move |_: leptos::ev::TouchEvent| swipe.update_value(|d| d.touch_cancel());

    view! {
        <Show when=move || displayed.with(Option::is_some)>
            <div
                class="lightbox-overlay fixed inset-0 z-[60] flex items-center justify-center bg-black/90 p-4"
                class:lightbox-closing=move || !is_open.get()
                role="dialog"
                aria-modal="true"
                aria-label="Product gallery"
                on:click=move |_| close()
                on:touchstart=on_touch_start
                on:touchend=on_touch_end
                on:touchcancel=on_touch_cancel
            >
                <button
                    node_ref=close_button_ref
                    type="button"
                    class="lightbox-control absolute top-4 right-4"
                    aria-label="Close gallery"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        close();
                    }
                >
                    <Icon name=icons::X class="w-6 h-6"/>
                </button>

                <button
                    type="button"
                    class="lightbox-control absolute left-2 top-1/2 -translate-y-1/2 sm:left-6"
                    aria-label="Previous product"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        dispatch(LightboxCommand::Navigate(Direction::Previous));
                    }
                >
                    <Icon name=icons::CHEVRON_LEFT class="w-6 h-6"/>
                </button>

                <button
                    type="button"
                    class="lightbox-control absolute right-2 top-1/2 -translate-y-1/2 sm:right-6"
                    aria-label="Next product"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        dispatch(LightboxCommand::Navigate(Direction::Next));
                    }
                >
                    <Icon name=icons::CHEVRON_RIGHT class="w-6 h-6"/>
                </button>

                <div
                    class="relative flex w-full max-w-3xl flex-col items-center"
                    on:click=|ev| ev.stop_propagation()
                >
                    <LightboxImage session=session caption_ref=caption_ref />

                    <div node_ref=caption_ref class="mt-4 text-center text-white">
                        <p class="text-sm text-white/60">
                            {move || format!("{} / {}", current_index.get() + 1, total)}
                        </p>
                        <h3 class="font-heading text-2xl font-semibold">
                            {move || displayed.with(|p| p.as_ref().map(|p| p.name.clone()))}
                        </h3>
                        {move || {
                            displayed
                                .with(|p| p.as_ref().and_then(|p| p.subtitle.clone()))
                                .map(|s| view! { <p class="text-white/70">{s}</p> })
                        }}
                        <a href=tel_href(LIGHTBOX_CONTACT_PHONE) class="btn-primary mt-4 inline-flex">
                            <Icon name=icons::PHONE class="w-4 h-4"/>
                            "Contact Us"
                        </a>
                    </div>

                    <div class="mt-4 flex flex-wrap justify-center gap-2" role="tablist">
                        {(0..total)
                            .map(|i| {
                                view! {
                                    <button
                                        type="button"
                                        role="tab"
                                        class="lightbox-dot"
                                        class:lightbox-dot-active=move || current_index.get() == i
                                        aria-selected=move || (current_index.get() == i).to_string()
                                        aria-label=format!("Go to product {}", i + 1)
                                        on:click=move |_| dispatch(LightboxCommand::JumpTo(i))
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
