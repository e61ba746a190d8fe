//! Motion context
//!
//! Provides:
//! - MotionContext for the global motion setup
//! - Reduced-motion detection via prefers-reduced-motion
//! - Replay helper for CSS transitions that must restart in place

use leptos::prelude::*;

use crate::core::MotionConfig;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[cfg(not(feature = "ssr"))]
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Shared motion state
#[derive(Clone, Copy)]
pub struct MotionContext {
    /// Setup chosen by the application shell
    pub config: StoredValue<MotionConfig>,
    /// User asked the system for reduced motion
    pub system_prefers_reduced: RwSignal<bool>,
    /// Whether entrance transitions should be skipped entirely
    pub reduced: Memo<bool>,
}

impl MotionContext {
    pub fn config(&self) -> MotionConfig {
        self.config.get_value()
    }
}

/// Detect system reduced-motion preference
#[cfg(not(feature = "ssr"))]
fn detect_system_prefers_reduced() -> bool {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(media_query)) = window.match_media(REDUCED_MOTION_QUERY) {
            return media_query.matches();
        }
    }
    false
}

/// Register the motion setup once for the whole application
pub fn provide_motion_context(config: MotionConfig) -> MotionContext {
    // Server and first client render agree on "motion on"; the real
    // preference is applied by an effect after hydration.
    let system_prefers_reduced = RwSignal::new(false);

    let reduced = Memo::new(move |_| !config.enabled || system_prefers_reduced.get());

    let ctx = MotionContext {
        config: StoredValue::new(config),
        system_prefers_reduced,
        reduced,
    };

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            system_prefers_reduced.set(detect_system_prefers_reduced());

            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media(REDUCED_MOTION_QUERY) {
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            system_prefers_reduced.set(e.matches());
                        },
                    );

                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );

                    // Keep the closure alive
                    handler.forget();
                }
            }
        });
    }

    provide_context(ctx);

    ctx
}

/// Use motion context from anywhere in the component tree
pub fn use_motion_context() -> MotionContext {
    use_context::<MotionContext>().expect("MotionContext should be provided")
}

/// Restart a CSS animation on `element` by toggling `class` around a forced reflow
#[cfg(not(feature = "ssr"))]
pub fn replay_animation(element: &web_sys::HtmlElement, class: &str) {
    let class_list = element.class_list();
    let _ = class_list.remove_1(class);
    // Reading layout flushes the style change so re-adding restarts the animation
    let _ = element.offset_width();
    let _ = class_list.add_1(class);
}

#[cfg(not(feature = "ssr"))]
fn scroll_behavior(smooth: bool) -> web_sys::ScrollBehavior {
    if smooth {
        web_sys::ScrollBehavior::Smooth
    } else {
        web_sys::ScrollBehavior::Instant
    }
}

/// Scroll the element with `id` into view; jumps instead when `smooth` is off
#[cfg(not(feature = "ssr"))]
pub fn scroll_to_section(id: &str, smooth: bool) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(scroll_behavior(smooth));
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(feature = "ssr")]
pub fn scroll_to_section(_id: &str, _smooth: bool) {}

/// Scroll the window back to the top
#[cfg(not(feature = "ssr"))]
pub fn scroll_to_top(smooth: bool) {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(scroll_behavior(smooth));
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(feature = "ssr")]
pub fn scroll_to_top(_smooth: bool) {}
