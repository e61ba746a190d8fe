//! Document head
//!
//! [`SiteHead`] is rendered once by the server shell and carries everything
//! that depends on the deployment (canonical origin, verification token,
//! JSON-LD). [`SeoMeta`] holds the constant home page tags and goes through
//! `leptos_meta` like any other page metadata.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::og_image::{OG_HEIGHT, OG_WIDTH};
use crate::core::seo::{
    CATEGORY, COMPANY, GOOGLEBOT, OG_DESCRIPTION, OG_IMAGE_ALT, OG_TITLE, ROBOTS,
    SITE_DESCRIPTION, SITE_TITLE, SiteSettings, TWITTER_DESCRIPTION, TWITTER_TITLE, json_ld_script,
    keywords_meta, local_business_schema,
};

/// Deployment-specific head tags; server-rendered only
#[component]
pub fn SiteHead(settings: SiteSettings) -> impl IntoView {
    let canonical = settings.canonical_url();
    let og_image = settings.og_image_url();
    let schema = json_ld_script(&local_business_schema(&settings.site_url));

    view! {
        <link rel="canonical" href=canonical.clone()/>
        {leptos::html::meta().attr("property", "og:url").content(canonical)}
        {leptos::html::meta().attr("property", "og:image").content(og_image.clone())}
        {leptos::html::meta().attr("property", "og:image:width").content(OG_WIDTH.to_string())}
        {leptos::html::meta().attr("property", "og:image:height").content(OG_HEIGHT.to_string())}
        {leptos::html::meta().attr("property", "og:image:alt").content(OG_IMAGE_ALT)}
        <meta name="twitter:image" content=og_image/>
        {settings
            .google_site_verification
            .map(|token| view! { <meta name="google-site-verification" content=token/> })}
        <script type="application/ld+json" inner_html=schema></script>
    }
}

/// Title, description and social tags of the home page
#[component]
pub fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>
        <Meta name="keywords" content=keywords_meta()/>
        <Meta name="author" content=COMPANY.name/>
        <Meta name="robots" content=ROBOTS/>
        <Meta name="googlebot" content=GOOGLEBOT/>
        <Meta name="category" content=CATEGORY/>

        <Meta property="og:type" content="website"/>
        <Meta property="og:locale" content="en_IN"/>
        <Meta property="og:site_name" content=COMPANY.name/>
        <Meta property="og:title" content=OG_TITLE/>
        <Meta property="og:description" content=OG_DESCRIPTION/>

        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=TWITTER_TITLE/>
        <Meta name="twitter:description" content=TWITTER_DESCRIPTION/>
    }
}
