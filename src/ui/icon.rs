use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names available under `/icons`
pub mod icons {
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const ARROW_UP: &str = "arrow-up";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const X: &str = "x";
    pub const MENU: &str = "menu";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const IMAGE_OFF: &str = "image-off";
    pub const REFRESH: &str = "refresh";
    pub const STAR: &str = "star";
    pub const SHIELD: &str = "shield";
    pub const PHONE: &str = "phone";
    pub const MAIL: &str = "mail";
    pub const SEND: &str = "send";
    pub const EXPAND: &str = "expand";
}
