//! Landing page sections

mod about;
mod hero;
mod intro;
mod step;
mod testimonials;

pub use about::About;
pub use hero::Hero;
pub use intro::Intro;
pub use step::Journey;
pub use testimonials::Testimonials;

use leptos::prelude::*;

/// Headline figure with a caption underneath
#[component]
fn Stat(value: &'static str, label: &'static str, #[prop(default = "text-green-700")] tone: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class=format!("text-2xl md:text-3xl font-bold {tone}")>{value}</div>
            <div class="text-sm opacity-80">{label}</div>
        </div>
    }
}
