//! Site footer

use chrono::Datelike;
use kisan_core::catalog::icons;
use leptos::prelude::*;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/#about", "About Us"),
    ("/plans", "Plans"),
    ("/callback", "Request a Callback"),
];

const LEGAL_LINKS: [&str; 4] = ["Privacy Policy", "Terms of Service", "Refund Policy", "Support"];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("https://facebook.com", "Facebook"),
    ("https://twitter.com", "Twitter"),
    ("https://instagram.com", "Instagram"),
    ("https://youtube.com", "YouTube"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-green-900 text-green-50 pt-12 pb-6">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid gap-10 md:grid-cols-4">
                <div>
                    <h3 class="text-2xl font-bold mb-3">"🌱 KisanEdge"</h3>
                    <p class="text-green-200 text-sm">
                        "Empowering Indian farmers with expert guidance, modern techniques and a community that grows together."
                    </p>
                    <div class="flex gap-4 mt-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=*href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-green-200 hover:text-white text-sm"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h4 class="font-semibold mb-3">"Quick Links"</h4>
                    <ul class="space-y-2 text-sm">
                        {QUICK_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <li>
                                        <a href=*href class="text-green-200 hover:text-white">{*label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="font-semibold mb-3">"Legal"</h4>
                    <ul class="space-y-2 text-sm">
                        {LEGAL_LINKS
                            .iter()
                            .map(|label| {
                                view! {
                                    <li>
                                        <a href="#" class="text-green-200 hover:text-white">{*label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="font-semibold mb-3">"Contact Us"</h4>
                    <ul class="space-y-2 text-sm text-green-200">
                        <li>{icons::PHONE} " +91 98765 43210"</li>
                        <li>"✉️ support@kisanedge.com"</li>
                        <li>
                            {icons::MAP_PIN}
                            " SGBAU Campus, Amravati, Maharashtra, India - 444602"
                        </li>
                    </ul>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-4 mt-10 pt-6 border-t border-green-800 flex flex-col md:flex-row justify-between text-xs text-green-300 gap-2">
                <p>{format!("© {year} KisanEdge. All rights reserved.")}</p>
                <p>"DPIIT Recognized • Made with ❤ for Indian Farmers"</p>
            </div>
        </footer>
    }
}
