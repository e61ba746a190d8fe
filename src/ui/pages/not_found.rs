//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::seo::{NOT_FOUND_DESCRIPTION, NOT_FOUND_TITLE};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=NOT_FOUND_TITLE/>
        <Meta name="description" content=NOT_FOUND_DESCRIPTION/>
        <Meta name="robots" content="noindex"/>

        <div class="flex min-h-screen flex-col items-center justify-center bg-white px-6 py-24">
            <div class="mx-auto max-w-2xl space-y-6 text-center">
                <h1 class="font-heading text-4xl font-bold text-brand-green md:text-5xl">
                    "404 - Rice Field Not Found"
                </h1>
                <p class="mb-6 text-xl text-muted md:text-2xl">
                    "Oops! It seems like you've wandered into unplanted fields. The page you're looking for doesn't exist."
                </p>
                <div class="mt-16">
                    <A href="/" attr:class="btn-primary btn-lg">
                        "Return to Home"
                    </A>
                </div>
            </div>
        </div>
    }
}
