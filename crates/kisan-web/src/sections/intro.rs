use kisan_core::catalog::icons;
use leptos::prelude::*;

use super::Stat;

struct Kpi {
    icon: &'static str,
    figure: &'static str,
    title: &'static str,
    description: &'static str,
}

const KPIS: [Kpi; 4] = [
    Kpi {
        icon: icons::USERS,
        figure: "5,000+",
        title: "5,000+ Farmers Empowered",
        description: "Over 5,000 farmers across 20+ districts have seen significant improvements in their yield and income through our expert guidance.",
    },
    Kpi {
        icon: "📈",
        figure: "30%",
        title: "30% Average Yield Increase",
        description: "Farmers following our scientific guidance and crop-specific plans have reported an average of 30% increase in their crop yield.",
    },
    Kpi {
        icon: icons::PHONE,
        figure: "24/7",
        title: "24/7 Expert Access",
        description: "Get expert agricultural advice anytime, anywhere through our platform. Support available via phone, WhatsApp, and web.",
    },
    Kpi {
        icon: icons::STAR,
        figure: "95%",
        title: "95% Farmer Satisfaction",
        description: "Our services consistently receive high satisfaction ratings from farmers who trust our expertise for their agricultural success.",
    },
];

#[component]
pub fn Intro() -> impl IntoView {
    view! {
        <section class="py-20 bg-green-800 text-white">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center max-w-4xl mx-auto mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold mb-6">"Why Farmers Trust KisanEdge for a Bountiful Future"</h2>
                    <p class="text-lg md:text-xl text-green-100">
                        "Our commitment to innovation and farmer success drives measurable results. Join thousands of successful farmers who are achieving extraordinary growth."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {KPIS
                        .iter()
                        .map(|kpi| {
                            view! {
                                <div class="bg-white text-gray-800 rounded-2xl p-6 text-center shadow-lg">
                                    <div class="text-3xl mb-3">{kpi.icon}</div>
                                    <div class="text-3xl font-bold text-green-700 mb-2">{kpi.figure}</div>
                                    <h3 class="font-semibold mb-2">{kpi.title}</h3>
                                    <p class="text-sm text-gray-600">{kpi.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mt-16">
                    <Stat value="20+" label="Districts Covered" tone="text-white" />
                    <Stat value="100+" label="Crop Varieties" tone="text-white" />
                    <Stat value="24x7" label="Support Available" tone="text-white" />
                    <Stat value="₹50L+" label="Income Generated" tone="text-white" />
                </div>
            </div>
        </section>
    }
}
