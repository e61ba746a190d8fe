use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::MotionConfig;
use crate::core::seo::SiteSettings;
use crate::ui::seo::SiteHead;
use crate::ui::{HomePage, NotFoundPage, provide_motion_context};

/// Revealed content stays visible when scripts never run
const NOSCRIPT_STYLE: &str =
    ".reveal{opacity:1!important;transform:none!important;clip-path:none!important}";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content="#2E7D32"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <SiteHead settings=settings/>
                <noscript>
                    <style>{NOSCRIPT_STYLE}</style>
                </noscript>
                <MetaTags/>
            </head>
            <body class="font-body text-gray-900 antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_motion_context(MotionConfig::default());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/annadaata.css"/>
        <Link rel="icon" href="/favicon.ico"/>
        <Link rel="apple-touch-icon" href="/apple-icon.png"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
