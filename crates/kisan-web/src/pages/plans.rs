//! Plans Page

use kisan_core::catalog::{icons, Feature, Package};
use kisan_core::{PackageKey, PackageTabs};
use leptos::prelude::*;

#[component]
fn FeatureList(items: &'static [Feature]) -> impl IntoView {
    view! {
        <ul class="space-y-3">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="flex items-start text-gray-700">
                            <span class="mr-3 shrink-0">{item.icon}</span>
                            <span>{item.text}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn Summary(package: &'static Package) -> impl IntoView {
    view! {
        <div class="relative bg-white rounded-2xl shadow-lg p-6 space-y-6">
            {package
                .discount_label()
                .map(|label| {
                    view! {
                        <span class="absolute top-4 right-4 bg-green-600 text-white text-xs font-bold px-3 py-1 rounded-full">
                            {label}
                        </span>
                    }
                })}
            <div>
                <h3 class="text-2xl font-bold text-gray-900 mb-1">{package.title}</h3>
                <p class="text-gray-600">{package.subtitle}</p>
            </div>

            <FeatureList items=package.included />

            <dl class="grid grid-cols-2 gap-3 text-sm">
                <dt class="text-gray-500">"Validity"</dt>
                <dd class="font-medium">{package.validity}</dd>
                {package
                    .support_type
                    .map(|support| {
                        view! {
                            <dt class="text-gray-500">"Support"</dt>
                            <dd class="font-medium">{support}</dd>
                        }
                    })}
                {package
                    .ideal_for
                    .map(|ideal| {
                        view! {
                            <dt class="text-gray-500">"Ideal for"</dt>
                            <dd class="font-medium">{ideal}</dd>
                        }
                    })}
            </dl>

            {package
                .batch
                .map(|batch| {
                    view! {
                        <div class="bg-yellow-50 border border-yellow-200 rounded-lg p-3 text-sm">
                            {icons::CALENDAR}
                            " Next batch: "
                            <span class="font-semibold">{batch.date}</span>
                            <span class="block text-red-600 font-medium">{batch.seats_status}</span>
                        </div>
                    }
                })}

            <div>
                <p class="text-gray-600 text-sm mb-1">"Cost"</p>
                <span class="text-3xl font-bold text-gray-900 mr-2">{package.display_cost()}</span>
                {package
                    .display_original_cost()
                    .map(|original| view! { <span class="text-gray-500 line-through">{original}</span> })}
                <p class="text-gray-500 text-xs mt-1">"(Refund policy applicable)"</p>
            </div>

            <div class="flex flex-col gap-3">
                <a
                    href=format!("/enroll?plan={}", package.key)
                    class="text-center bg-green-600 hover:bg-green-700 text-white font-semibold py-3 rounded-lg"
                >
                    "Enroll Now"
                </a>
                <a
                    href="/callback"
                    class="text-center border border-green-600 text-green-700 hover:bg-green-50 font-semibold py-3 rounded-lg"
                >
                    "Not sure? Request a callback"
                </a>
            </div>
        </div>
    }
}

#[component]
fn Details(package: &'static Package) -> impl IntoView {
    let closing = match (package.review, package.pitch) {
        (Some(review), _) => view! {
            <div>
                <h5 class="font-semibold text-gray-800 mb-3">"Student Reviews"</h5>
                <div class="flex items-center mb-2">
                    {icons::STAR.repeat(5)}
                    <span class="font-semibold text-gray-800 ml-2 text-sm">
                        {format!("{} based on {}", review.rating, review.based_on)}
                    </span>
                </div>
                <p class="text-gray-700 text-sm">{format!("\"{}\"", review.text)}</p>
            </div>
        }
        .into_any(),
        (None, Some(pitch)) => view! {
            <div>
                <h4 class="text-lg font-bold text-green-800 mb-3">{pitch.heading}</h4>
                <p class="text-gray-700 text-sm">{pitch.body}</p>
                {package
                    .bonus
                    .map(|bonus| {
                        view! {
                            <p class="text-gray-700 mt-4">
                                {icons::BOOK_OPEN}
                                " 🎁 Bonus: "
                                <span class="font-semibold">{bonus}</span>
                            </p>
                        }
                    })}
            </div>
        }
        .into_any(),
        (None, None) => ().into_any(),
    };

    view! {
        <div class="bg-green-50 rounded-2xl p-6 space-y-6">
            <h4 class="text-lg font-semibold flex items-center gap-2">
                {icons::LIGHTBULB}
                {format!(" More About {} Package", package.label)}
            </h4>

            {(!package.what_youll_get.is_empty())
                .then(|| {
                    view! {
                        <div>
                            <h5 class="font-semibold text-gray-800 mb-3">"What You'll Get"</h5>
                            <ul class="space-y-2">
                                {package
                                    .what_youll_get
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <li class="flex items-start text-gray-700">
                                                <span class="mr-2">{icons::CHECK}</span>
                                                <span>{*item}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}

            <div>
                <h5 class="font-semibold text-gray-800 mb-3">"Package Highlights"</h5>
                <FeatureList items=package.highlights />
            </div>

            {closing}
        </div>
    }
}

/// Tabbed comparison of the three packages
#[component]
pub fn PlansPage() -> impl IntoView {
    let tabs = RwSignal::new(PackageTabs::default());

    view! {
        <div class="max-w-6xl mx-auto px-4 py-12">
            <div class="flex justify-center gap-2 bg-gray-100 rounded-full p-1 w-fit mx-auto mb-10">
                {PackageKey::ALL
                    .into_iter()
                    .map(|key| {
                        view! {
                            <button
                                class=move || {
                                    if tabs.with(|t| t.is_selected(key)) {
                                        "px-6 py-2 rounded-full font-semibold bg-green-700 text-white shadow-md"
                                    } else {
                                        "px-6 py-2 rounded-full font-semibold text-gray-700 hover:bg-gray-300"
                                    }
                                }
                                on:click=move |_| tabs.update(|t| t.select(key))
                            >
                                {key.package().label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let package = tabs.with(PackageTabs::current);
                view! {
                    <h2 class="text-2xl font-semibold mb-8 text-gray-900">
                        {format!("{} Counselling Packages", package.label)}
                    </h2>
                    <div class="grid lg:grid-cols-2 gap-8">
                        <Summary package=package />
                        <Details package=package />
                    </div>
                }
            }}
        </div>
    }
}
