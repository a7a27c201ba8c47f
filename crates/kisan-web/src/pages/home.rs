//! Home Page

use leptos::prelude::*;

use crate::sections::{About, Hero, Intro, Journey, Testimonials};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <About />
            <Intro />
            <Journey />
            <Testimonials />
        </div>
    }
}
