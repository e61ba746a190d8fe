use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Dual-ring loading spinner in the brand colours
#[component]
pub fn Spinner(
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Text announced to screen readers
    #[prop(default = "Loading...")]
    label: &'static str,
) -> impl IntoView {
    let classes = if class.is_empty() {
        format!("spinner {}", size.class())
    } else {
        format!("spinner {} {}", size.class(), class)
    };

    view! {
        <div class=classes role="status" aria-live="polite">
            <div class="spinner-ring spinner-ring-outer"></div>
            <div class="spinner-ring spinner-ring-inner"></div>
            <span class="sr-only">{label}</span>
        </div>
    }
}

/// Shimmering placeholder block
#[component]
pub fn Skeleton(
    /// Additional CSS classes, usually sizing
    #[prop(default = String::new())]
    class: String,
    /// Whether skeleton is circular
    #[prop(default = false)]
    circle: bool,
) -> impl IntoView {
    let shape_class = if circle {
        "skeleton-circle"
    } else {
        "skeleton-rect"
    };

    view! {
        <div class=format!("skeleton {} {}", shape_class, class) aria-hidden="true">
            <div class="skeleton-shimmer"></div>
        </div>
    }
}
