use kisan_core::catalog::icons;
use leptos::prelude::*;

const FEATURES: [(&str, &str, &str); 5] = [
    ("🌿", "Smart Agri Consulting", "Expert help for crop issues, fertilizer use, pest control & planning"),
    ("📱", "Instant Access", "Consult via phone, WhatsApp, or web platform anytime"),
    (icons::MESSAGE_CIRCLE, "Local Languages", "Support in Marathi, Hindi & regional dialects"),
    (icons::MAP_PIN, "Wide Reach", "5,000+ farmers across 20+ districts trust us"),
    (icons::LIGHTBULB, "Affordable Plans", "Crop-specific solutions with transparent pricing"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-green-50/50">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold mb-6">"Your Partner for Agricultural Prosperity"</h2>
                    <p class="text-lg md:text-xl text-gray-600">
                        "Empowering Indian farmers through expert guidance, personalized crop plans, and accessible digital tools for sustainable growth."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="relative">
                        <img
                            src="https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b?auto=format&fit=crop&w=800&q=80"
                            alt="Farmer using technology in field"
                            class="w-full rounded-3xl shadow-lg"
                        />
                        <div class="absolute -top-4 -right-4 bg-white rounded-2xl p-4 shadow-lg border text-sm">
                            <div class="font-semibold">"🏅 DPIIT Recognized"</div>
                            <div class="text-gray-500">"Agri-tech Startup"</div>
                        </div>
                    </div>

                    <div class="bg-white rounded-2xl shadow-lg p-6">
                        <div class="mb-6">
                            <h3 class="font-semibold">"DPIIT-recognized agri-tech startup"</h3>
                            <p class="text-sm text-gray-500">"From SGBAU, Maharashtra"</p>
                        </div>
                        <div class="grid sm:grid-cols-2 gap-4">
                            {FEATURES
                                .iter()
                                .map(|(icon, title, description)| {
                                    view! {
                                        <div class="border rounded-xl p-4 flex items-start gap-3 hover:shadow-md transition">
                                            <span class="text-xl shrink-0">{*icon}</span>
                                            <div>
                                                <h4 class="font-semibold mb-1">{*title}</h4>
                                                <p class="text-sm text-gray-600">{*description}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="pt-6 text-center">
                            <a
                                href="/plans"
                                class="inline-block bg-green-600 hover:bg-green-700 text-white font-semibold px-5 py-2 rounded-lg"
                            >
                                "Learn More About Our Mission"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
