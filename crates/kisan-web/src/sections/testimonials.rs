//! Rotating farmer testimonials

use kisan_core::testimonials::ROTATE_INTERVAL;
use kisan_core::{Carousel, Testimonial, TESTIMONIALS};
use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::{logging, prelude::*};

use super::Stat;

/// Photo, or the farmer's initials when the photo fails to load
#[component]
fn Avatar(testimonial: &'static Testimonial) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || {
                view! {
                    <div class="w-16 h-16 rounded-full bg-green-600 text-white text-xl font-bold flex items-center justify-center">
                        {testimonial.initials()}
                    </div>
                }
            }
        >
            <img
                src=testimonial.image
                alt=testimonial.name
                class="w-16 h-16 rounded-full object-cover"
                on:error=move |_| set_failed.set(true)
            />
        </Show>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    match set_interval_with_handle(move || carousel.update(Carousel::advance), ROTATE_INTERVAL) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => logging::warn!("testimonial rotation disabled: {e:?}"),
    }

    let current = move || &TESTIMONIALS[carousel.with(Carousel::index)];

    view! {
        <section id="testimonials" class="py-20 bg-green-50/50">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center max-w-4xl mx-auto mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold mb-6">"Voices of Success: Real Farmers, Real Results"</h2>
                    <p class="text-lg md:text-xl text-gray-600">
                        "Hear directly from the farmers whose lives and livelihoods have been positively transformed by KisanEdge's expert agricultural guidance."
                    </p>
                </div>

                <div class="max-w-4xl mx-auto">
                    {move || {
                        let testimonial = current();
                        view! {
                            <div class="bg-white rounded-3xl shadow-lg p-8 md:p-12">
                                <div class="text-4xl text-green-600 mb-4">"❝"</div>
                                <blockquote class="text-lg md:text-xl text-gray-700 italic mb-8">
                                    {format!("\"{}\"", testimonial.quote)}
                                </blockquote>
                                <div class="flex items-center gap-4">
                                    <Avatar testimonial=testimonial />
                                    <div>
                                        <div class="font-semibold text-lg">{testimonial.name}</div>
                                        <div class="text-gray-500">{testimonial.village}</div>
                                    </div>
                                </div>
                            </div>
                        }
                    }}

                    <div class="flex justify-center items-center gap-4 mt-8">
                        <button
                            class="w-10 h-10 rounded-full border border-green-600 text-green-700"
                            aria-label="Previous testimonial"
                            on:click=move |_| carousel.update(Carousel::retreat)
                        >
                            "‹"
                        </button>
                        <div class="flex gap-2">
                            {(0..TESTIMONIALS.len())
                                .map(|index| {
                                    view! {
                                        <button
                                            class=move || {
                                                if carousel.with(Carousel::index) == index {
                                                    "w-3 h-3 rounded-full bg-green-600 scale-125"
                                                } else {
                                                    "w-3 h-3 rounded-full bg-green-600/30 hover:bg-green-600/50"
                                                }
                                            }
                                            aria-label=format!("Go to testimonial {}", index + 1)
                                            on:click=move |_| carousel.update(|c| c.select(index))
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button
                            class="w-10 h-10 rounded-full border border-green-600 text-green-700"
                            aria-label="Next testimonial"
                            on:click=move |_| carousel.update(Carousel::advance)
                        >
                            "›"
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-3 gap-8 max-w-2xl mx-auto mt-16 text-gray-600">
                    <Stat value="4.9/5" label="Average Rating" />
                    <Stat value="500+" label="Success Stories" />
                    <Stat value="98%" label="Would Recommend" />
                </div>
            </div>
        </section>
    }
}
