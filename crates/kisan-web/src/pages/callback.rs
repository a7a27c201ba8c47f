//! Callback Request Page

use kisan_core::forms::{CALLBACK_TIME_OPTIONS, PLAN_INTEREST_OPTIONS};
use kisan_core::{send_callback, CallbackForm};
use leptos::{logging, prelude::*};

use crate::api;
use crate::components::{text_of, InputField, SelectField, TextareaField};

#[component]
pub fn CallbackPage() -> impl IntoView {
    let form = RwSignal::new(CallbackForm::default());
    let (thanked, set_thanked) = signal(None::<String>);

    let on_input = Callback::new(move |(name, value): (&'static str, String)| {
        form.update(|f| {
            if let Err(e) = f.set(name, value) {
                logging::warn!("{e}");
            }
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        leptos::task::spawn_local(async move {
            match send_callback(&api::gateway(), &current).await {
                Ok(receipt) => {
                    logging::log!("Callback request accepted: {:?}", receipt.reply.body);
                    form.update(CallbackForm::reset);
                    set_thanked.set(Some(receipt.farmer_name));
                }
                Err(e) => logging::error!("Error submitting callback request: {e}"),
            }
        });
    };

    view! {
        <div class="min-h-screen bg-green-50 flex items-center justify-center px-4 py-12">
            <div class="bg-white rounded-2xl shadow-xl w-full max-w-lg p-8">
                <h2 class="text-3xl font-extrabold text-gray-900 text-center mb-6">"📞 Request a Callback"</h2>

                <Show
                    when=move || thanked.with(Option::is_some)
                    fallback=move || {
                        view! {
                            <form class="space-y-5" on:submit=submit>
                                <InputField
                                    label="Farmer Name"
                                    name="farmerName"
                                    value=text_of(form, |f| &f.farmer_name)
                                    on_input=on_input
                                    required=true
                                    placeholder="Your Full Name"
                                />
                                <InputField
                                    label="Phone Number"
                                    name="phoneNumber"
                                    input_type="tel"
                                    value=text_of(form, |f| &f.phone_number)
                                    on_input=on_input
                                    required=true
                                    pattern="[0-9]{10}"
                                    maxlength="10"
                                    placeholder="e.g., 9876543210"
                                />
                                <SelectField
                                    label="Plan Interested In"
                                    name="planInterestedIn"
                                    options=&PLAN_INTEREST_OPTIONS
                                    value=text_of(form, |f| &f.plan_interested_in)
                                    on_change=on_input
                                />
                                <InputField
                                    label="District / Village"
                                    name="districtVillage"
                                    value=text_of(form, |f| &f.district_village)
                                    on_input=on_input
                                    placeholder="e.g., Pune / Wagholi"
                                />
                                <SelectField
                                    label="Preferred Callback Time"
                                    name="preferredCallbackTime"
                                    options=&CALLBACK_TIME_OPTIONS
                                    value=text_of(form, |f| &f.preferred_callback_time)
                                    on_change=on_input
                                />
                                <TextareaField
                                    label="Message / Query"
                                    name="messageQuery"
                                    value=text_of(form, |f| &f.message_query)
                                    on_input=on_input
                                    rows=4
                                    placeholder="Tell us what you need help with..."
                                />
                                <button
                                    type="submit"
                                    class="w-full bg-green-600 hover:bg-green-700 text-white font-semibold py-3 rounded-lg"
                                >
                                    "Submit Request"
                                </button>
                            </form>
                        }
                    }
                >
                    <div class="text-center">
                        <p class="text-xl font-semibold text-green-800 mb-4">
                            {move || format!("🎉 Thank you, {}!", thanked.get().unwrap_or_default())}
                        </p>
                        <p class="text-gray-700 mb-4">
                            "Our agri-expert team will call you shortly to discuss your query."
                        </p>
                        <p class="text-gray-700 font-medium">
                            "If urgent, you may also reach us at: "
                            <span class="text-green-700">"📞 98344 14542"</span>
                        </p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
