use leptos::prelude::*;

const STEPS: [(&str, &str, &str); 5] = [
    ("🌐", "Visit Website", "Go to www.kisanedge.com using your phone or computer to explore our services."),
    ("📋", "Explore Plans", "Browse Basic, Standard, and Premium plans with clear pricing and comprehensive benefits."),
    ("📞", "Request Callback", "Fill a simple form if you need help choosing the right plan for your farming needs."),
    ("🛒", "Purchase Plan", "Pay online securely using Razorpay with UPI, card, or net banking options."),
    ("🌱", "Start Consulting", "Our agricultural experts will contact you and begin personalized guidance for your crops."),
];

/// Five steps from first visit to first consultation
#[component]
pub fn Journey() -> impl IntoView {
    view! {
        <section class="py-20 bg-white">
            <div class="max-w-5xl mx-auto px-4">
                <div class="text-center max-w-4xl mx-auto mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold mb-6">
                        "Your Path to Smarter Farming: Simple Steps with KisanEdge"
                    </h2>
                    <p class="text-lg md:text-xl text-gray-600">
                        "Getting expert agricultural advice has never been easier. Follow these straightforward steps to transform your farming practices and boost your harvest."
                    </p>
                </div>

                <ol class="space-y-8">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (icon, title, description))| {
                            let side = if i % 2 == 0 { "md:flex-row" } else { "md:flex-row-reverse" };
                            view! {
                                <li class=format!("flex flex-col {side} items-center gap-6")>
                                    <div class="w-14 h-14 shrink-0 rounded-full bg-green-600 text-white text-xl font-bold flex items-center justify-center">
                                        {i + 1}
                                    </div>
                                    <div class="flex-1 border rounded-2xl p-6 shadow-sm">
                                        <h3 class="text-xl font-semibold mb-2">{*icon} " " {*title}</h3>
                                        <p class="text-gray-600">{*description}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>

                <div class="text-center mt-16">
                    <p class="text-lg text-gray-600 mb-6">
                        "Ready to start your journey with expert agricultural guidance?"
                    </p>
                    <a
                        href="/plans"
                        class="inline-block bg-green-600 hover:bg-green-700 text-white font-semibold px-8 py-3 rounded-full"
                    >
                        "Get Started Today"
                    </a>
                </div>
            </div>
        </section>
    }
}
