use leptos::html;
use leptos::prelude::*;

use crate::core::EntranceTransition;
use crate::ui::hooks::{InViewOptions, use_in_view};
use crate::ui::motion::use_motion_context;

/// Wraps content in a `div` that plays `transition` the first time it scrolls into view
#[component]
pub fn Reveal(
    /// Preset and timing
    #[prop(default = EntranceTransition::default())]
    transition: EntranceTransition,
    /// Position inside a staggered group
    #[prop(default = 0)]
    index: usize,
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: String,
    /// Play immediately instead of waiting for the viewport (above-the-fold content)
    #[prop(default = false)]
    immediate: bool,
    children: Children,
) -> impl IntoView {
    let motion = use_motion_context();
    let node_ref = NodeRef::<html::Div>::new();

    let config = motion.config();
    let in_view = use_in_view(
        node_ref,
        InViewOptions {
            root_margin: transition.root_margin(),
            threshold: config.threshold(),
            once: config.once,
        },
    );

    // Above-the-fold content flips to visible on the first client frame
    let (mounted, set_mounted) = signal(false);
    if immediate {
        Effect::new(move |_| {
            request_animation_frame(move || set_mounted.set(true));
        });
    }

    let style = move || {
        let visible = if immediate {
            mounted.get()
        } else {
            in_view.get()
        };
        transition.style(visible, index, motion.reduced.get())
    };

    view! {
        <div node_ref=node_ref class=format!("reveal {}", class) style=style>
            {children()}
        </div>
    }
}
