//! Browser-observing hooks
//!
//! All hooks start from the value the server rendered and only update after
//! hydration, so the first client render always matches the SSR markup.

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Width below which the layout is treated as mobile (px)
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Options for [`use_in_view`]
#[derive(Debug, Clone, PartialEq)]
pub struct InViewOptions {
    /// IntersectionObserver `rootMargin`
    pub root_margin: String,
    /// Visible fraction required to trigger
    pub threshold: f64,
    /// Stay `true` after the first intersection
    pub once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            root_margin: crate::core::trigger_at(crate::core::animation::DEFAULT_TRIGGER_OFFSET),
            threshold: 0.1,
            once: true,
        }
    }
}

/// Track whether the element behind `target` intersects the viewport
pub fn use_in_view(target: NodeRef<html::Div>, options: InViewOptions) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

        // Observer plus the callback it calls into; both live until disconnected
        let active = StoredValue::new_local(None::<(web_sys::IntersectionObserver, EntriesCallback)>);
        let disconnect = move || {
            active.try_update_value(|slot| {
                if let Some((observer, _callback)) = slot.take() {
                    observer.disconnect();
                }
            });
        };

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            disconnect();

            let once = options.once;
            let callback = EntriesCallback::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };

                        let intersecting = entry.is_intersecting();
                        if once {
                            if intersecting {
                                set_in_view.set(true);
                                observer.unobserve(&entry.target());
                            }
                        } else {
                            set_in_view.set(intersecting);
                        }
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_root_margin(&options.root_margin);
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));

            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            ) {
                Ok(observer) => {
                    observer.observe(&element);
                    active.set_value(Some((observer, callback)));
                }
                Err(_) => {
                    // No observer support: show everything
                    set_in_view.set(true);
                }
            }
        });

        on_cleanup(disconnect);
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (target, options, set_in_view);
    }

    in_view
}

/// `true` while the viewport is narrower than [`MOBILE_BREAKPOINT`]
pub fn use_is_mobile() -> ReadSignal<bool> {
    let (is_mobile, set_is_mobile) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::resize;

        let measure = move || {
            if let Some(width) = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64())
            {
                set_is_mobile.set(width < MOBILE_BREAKPOINT);
            }
        };

        Effect::new(move |_| measure());

        let handle = window_event_listener(resize, move |_| measure());
        on_cleanup(move || drop(handle));
    }

    #[cfg(feature = "ssr")]
    {
        let _ = set_is_mobile;
    }

    is_mobile
}

/// `true` once the page is scrolled further than `offset` px
pub fn use_scrolled_past(offset: f64) -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let measure = move || {
            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                set_scrolled.set(y > offset);
            }
        };

        Effect::new(move |_| measure());

        let handle = window_event_listener(scroll, move |_| measure());
        on_cleanup(move || drop(handle));
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (offset, set_scrolled);
    }

    scrolled
}

/// A finished `<img>` that actually holds pixels (a broken one reports width 0)
pub fn image_decoded(complete: bool, natural_width: u32) -> bool {
    complete && natural_width > 0
}

/// Whether the image behind `image` is already decoded. Tracks the node, so an
/// effect calling this re-runs once the element is mounted or hydrated.
///
/// Covers images that finished before hydration attached their `load` listener.
#[cfg(not(feature = "ssr"))]
pub fn is_image_ready(image: NodeRef<html::Img>) -> bool {
    image
        .get()
        .is_some_and(|img| image_decoded(img.complete(), img.natural_width()))
}

#[cfg(feature = "ssr")]
pub fn is_image_ready(_image: NodeRef<html::Img>) -> bool {
    false
}

/// Animate from 0 to `target` over `duration_ms` once `start` turns true.
/// Jumps straight to `target` when `instant` is set.
pub fn use_count_up(
    target: u32,
    duration_ms: u32,
    start: Signal<bool>,
    instant: Signal<bool>,
) -> ReadSignal<u32> {
    let (value, set_value) = signal(0u32);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::animation::count_up_value;
        use gloo_timers::callback::Interval;

        let ticker = StoredValue::new_local(None::<Interval>);

        Effect::new(move |_| {
            if !start.get() || ticker.with_value(Option::is_some) {
                return;
            }

            if instant.get_untracked() {
                set_value.set(target);
                return;
            }

            let started_at = js_sys::Date::now();
            let interval = Interval::new(16, move || {
                let elapsed = js_sys::Date::now() - started_at;
                let current = count_up_value(target, elapsed, duration_ms);
                set_value.set(current);
                if current == target {
                    // Dropping the Interval cancels it; defer so it isn't
                    // dropped from inside its own callback
                    set_timeout(move || ticker.set_value(None), std::time::Duration::ZERO);
                }
            });
            ticker.set_value(Some(interval));
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (target, duration_ms, start, instant, set_value);
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_decoded_requires_pixels() {
        assert!(image_decoded(true, 640));
        // Broken images also report complete
        assert!(!image_decoded(true, 0));
        assert!(!image_decoded(false, 0));
        assert!(!image_decoded(false, 640));
    }

    #[test]
    fn test_in_view_defaults() {
        let options = InViewOptions::default();

        assert!(options.once);
        assert_eq!(options.threshold, 0.1);
        assert!(options.root_margin.starts_with("0px 0px -"));
    }
}
