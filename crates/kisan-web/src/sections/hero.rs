use kisan_core::catalog::icons;
use leptos::prelude::*;

use super::Stat;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen bg-gradient-to-br from-green-50 to-white flex items-center">
            <div class="max-w-7xl mx-auto px-4 py-20 grid lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-8">
                    <h1 class="text-4xl md:text-6xl font-bold leading-tight">
                        "Empowering Indian Farmers"
                        <br />
                        <span class="text-green-700">"with Intelligent Agri-Consulting"</span>
                    </h1>
                    <p class="text-lg md:text-xl text-gray-600 max-w-xl">
                        "Personalized expert guidance, crop-specific plans, and real-time insights for a prosperous harvest, accessible right from your phone."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <a
                            href="/plans"
                            class="bg-green-600 hover:bg-green-700 text-white font-semibold px-6 py-3 rounded-lg text-center"
                        >
                            "Explore Consulting Plans →"
                        </a>
                        <a
                            href="/callback"
                            class="border border-green-600 text-green-700 hover:bg-green-600 hover:text-white font-semibold px-6 py-3 rounded-lg text-center"
                        >
                            {icons::PHONE}
                            " Request a Free Callback"
                        </a>
                    </div>
                    <div class="grid grid-cols-3 gap-6 pt-8 text-gray-600">
                        <Stat value="5,000+" label="Farmers Helped" />
                        <Stat value="30%" label="Yield Increase" />
                        <Stat value="20+" label="Districts" />
                    </div>
                </div>
                <img
                    src="https://images.unsplash.com/photo-1500937386664-56d1dfef3854?auto=format&fit=crop&w=800&q=80"
                    alt="Happy Indian farmer with smartphone in green field"
                    class="w-full max-w-lg mx-auto rounded-3xl shadow-xl border-4 border-white"
                />
            </div>
        </section>
    }
}
