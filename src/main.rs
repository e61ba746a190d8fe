#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
mod routes {
    use axum::Router;
    use axum::http::header;
    use axum::response::IntoResponse;
    use axum::routing::get;

    use annadaata::core::SocialCard;
    use annadaata::core::og_image::OG_CONTENT_TYPE;
    use annadaata::core::seo::{robots_txt, sitemap_xml};

    /// Generated social preview card
    async fn opengraph_image() -> impl IntoResponse {
        tracing::info!("Rendering social preview image");
        (
            [
                (header::CONTENT_TYPE, OG_CONTENT_TYPE),
                (header::CACHE_CONTROL, "public, max-age=86400"),
            ],
            SocialCard::default().render_svg(),
        )
    }

    /// `/opengraph-image`, `/robots.txt` and `/sitemap.xml` for `site_url`
    pub fn seo_router(site_url: String) -> Router {
        let robots = robots_txt(&site_url);

        Router::new()
            .route("/opengraph-image", get(opengraph_image))
            .route(
                "/robots.txt",
                get(move || async move { ([(header::CONTENT_TYPE, "text/plain")], robots) }),
            )
            .route(
                "/sitemap.xml",
                get(move || async move {
                    let today = chrono::Utc::now().date_naive();
                    (
                        [(header::CONTENT_TYPE, "application/xml")],
                        sitemap_xml(&site_url, today),
                    )
                }),
            )
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use annadaata::app::*;
    use annadaata::core::config::Config;
    use axum::Router;
    use axum::http::{HeaderValue, header};
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, file_and_error_handler_with_context, generate_route_list};
    use tower::ServiceBuilder;
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tower_http::set_header::SetResponseHeaderLayer;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env();

    tracing::info!(
        "Config loaded: site_url={}, site_verification={}, image_cache_max_age={}s",
        config.site_url,
        config.has_site_verification(),
        config.image_cache_max_age
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let settings = config.site_settings();
    let provide_settings = move || provide_context(settings.clone());

    // Create ServeDir for pkg with pre-compressed file support
    // This serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Product photos are immutable per file name
    let image_cache = HeaderValue::from_str(&config.image_cache_control())?;
    let images_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            image_cache,
        ))
        .service(ServeDir::new(format!(
            "{}/images",
            leptos_options.site_root
        )));

    // Build the Leptos router
    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .nest_service("/images", images_service)
        .leptos_routes_with_context(&leptos_options, routes, provide_settings.clone(), {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler_with_context(provide_settings, shell))
        .with_state(leptos_options);

    let app = Router::new()
        .merge(routes::seo_router(config.site_url.clone()))
        .merge(leptos_router)
        // Add compression with Brotli priority (best compression for web)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
