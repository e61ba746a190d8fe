//! Home page: every section of the single-page site plus the shared
//! inquiry dialog.

use leptos::prelude::*;

use crate::ui::dialogs::{InquiryDialog, provide_inquiry_context};
use crate::ui::sections::{About, ContactSection, Footer, Header, Hero, Process, ProductsSection};
use crate::ui::seo::SeoMeta;

#[component]
pub fn HomePage() -> impl IntoView {
    provide_inquiry_context();

    view! {
        <SeoMeta/>
        <Header/>
        <main class="min-h-screen">
            <Hero/>
            <ProductsSection/>
            <About/>
            <Process/>
            <ContactSection/>
        </main>
        <Footer/>
        <InquiryDialog/>
    }
}
