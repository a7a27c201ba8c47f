//! Enrollment Page

use chrono::SecondsFormat;
use kisan_core::catalog::icons;
use kisan_core::{send_enrollment, Attachment, EnrollForm, PackageKey, ENROLL_SUCCESS_MESSAGE};
use leptos::{logging, prelude::*};
use leptos_router::hooks::use_query_map;

use crate::api;
use crate::components::{file_of, text_of, CheckboxField, FileInputField, InputField, TextareaField};
use crate::state::EnrollDraft;

/// Package chosen on the plans page, falling back to the default
fn requested_plan() -> PackageKey {
    let Some(plan) = use_query_map().with_untracked(|q| q.get("plan")) else {
        return PackageKey::default();
    };
    plan.parse().unwrap_or_else(|e| {
        logging::warn!("{e}");
        PackageKey::default()
    })
}

#[component]
pub fn EnrollPage() -> impl IntoView {
    let drafts = use_context::<EnrollDraft>().unwrap_or_default();
    let mut initial = EnrollForm::for_package(requested_plan());
    if let Some(draft) = drafts.take() {
        initial.apply_draft(&draft);
    }
    let form = RwSignal::new(initial);

    // The dialog can be submitted while this page is already mounted
    Effect::new(move |_| {
        if drafts.is_pending() {
            if let Some(draft) = drafts.take() {
                form.update(|f| f.apply_draft(&draft));
            }
        }
    });

    let on_input = Callback::new(move |(name, value): (&'static str, String)| {
        form.update(|f| {
            if let Err(e) = f.set(name, value) {
                logging::warn!("{e}");
            }
        });
    });

    let on_toggle = Callback::new(move |(name, checked): (&'static str, bool)| {
        form.update(|f| {
            if let Err(e) = f.set_checked(name, checked) {
                logging::warn!("{e}");
            }
        });
    });

    let on_pick = Callback::new(move |(name, file): (&'static str, Option<Attachment>)| {
        form.update(|f| {
            if let Err(e) = f.attach(name, file) {
                logging::warn!("{e}");
            }
        });
    });

    let aadhaar_off = Signal::derive(move || !form.with(|f| f.aadhaar_enabled));
    let document_off = Signal::derive(move || !form.with(|f| f.document_enabled));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        leptos::task::spawn_local(async move {
            match send_enrollment(&api::gateway(), &current).await {
                Ok(reply) => {
                    logging::log!("Enrollment accepted: {:?}", reply.body);
                    api::alert(ENROLL_SUCCESS_MESSAGE);
                }
                Err(e) => {
                    logging::error!("Error submitting enrollment: {e}");
                    api::alert(&e.user_message());
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-green-50 flex items-center justify-center px-4 py-12">
            <div class="bg-white rounded-2xl shadow-xl w-full max-w-2xl p-8">
                <h2 class="text-3xl font-extrabold text-gray-900 text-center mb-8">"✨ Enroll Now"</h2>

                <form class="space-y-6" on:submit=submit>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <InputField
                            label="Full Name"
                            name="fullName"
                            value=text_of(form, |f| &f.full_name)
                            on_input=on_input
                            required=true
                            placeholder="e.g., Ramesh Kumar"
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
                        <InputField
                            label="Email"
                            name="email"
                            input_type="email"
                            value=text_of(form, |f| &f.email)
                            on_input=on_input
                            placeholder="e.g., ramesh@example.com"
                        />
                        <InputField
                            label="District / Village"
                            name="districtVillage"
                            value=text_of(form, |f| &f.district_village)
                            on_input=on_input
                            required=true
                            placeholder="e.g., Pune / Wagholi"
                        />
                    </div>

                    <InputField
                        label="Plan Name"
                        name="planName"
                        value=Signal::derive(move || form.with(|f| f.plan_name().to_string()))
                        on_input=on_input
                        disabled=true
                        placeholder="Plan will be auto-filled"
                    />

                    <TextareaField
                        label="Query / Concern"
                        name="queryConcern"
                        value=text_of(form, |f| &f.query_concern)
                        on_input=on_input
                        placeholder="Any specific questions or concerns?"
                    />

                    <CheckboxField
                        label="Enable Aadhaar No. (Optional)"
                        id="enableAadhar"
                        checked=Signal::derive(move || form.with(|f| f.aadhaar_enabled))
                        on_toggle=on_toggle
                    />
                    <InputField
                        label="Aadhaar No."
                        name="aadharNo"
                        value=text_of(form, |f| &f.aadhaar_number)
                        on_input=on_input
                        disabled=aadhaar_off
                        pattern="^[2-9]{1}[0-9]{11}$"
                        maxlength="12"
                        placeholder="12-digit Aadhaar number"
                    />
                    <FileInputField
                        label="Aadhaar Card (Optional)"
                        name="aadhaarCard"
                        file_name=file_of(form, |f| &f.aadhaar_card)
                        on_pick=on_pick
                        disabled=aadhaar_off
                    />

                    <CheckboxField
                        label="Enable 7/12 Document Upload (Optional)"
                        id="enable712"
                        checked=Signal::derive(move || form.with(|f| f.document_enabled))
                        on_toggle=on_toggle
                    />
                    <FileInputField
                        label="Upload 7/12 Document"
                        name="upload712Document"
                        file_name=file_of(form, |f| &f.document)
                        on_pick=on_pick
                        disabled=document_off
                    />

                    <p class="text-sm text-gray-600 bg-blue-50 border-l-4 border-blue-400 p-3 rounded-md">
                        <span class="font-semibold">"Privacy Note:"</span>
                        " Your data will only be used for consultation purposes and will not be shared without explicit consent."
                    </p>

                    <CheckboxField
                        label="I agree to terms, refund policy, and data usage."
                        id="consent"
                        checked=Signal::derive(move || form.with(|f| f.consent))
                        on_toggle=on_toggle
                        required=true
                    />

                    <input type="hidden" name="planPrice" prop:value=move || form.with(EnrollForm::plan_price) />
                    <input
                        type="hidden"
                        name="timestamp"
                        prop:value=move || form.with(|f| f.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
                    />
                    <input type="hidden" name="internalUserId" prop:value=move || form.with(|f| f.internal_user_id.clone()) />
                    <input type="hidden" name="paymentMethod" prop:value=move || form.with(|f| f.payment_method.clone()) />

                    <div class="pt-4">
                        <button
                            type="submit"
                            class="w-full bg-green-600 hover:bg-green-700 text-white text-lg font-semibold py-3 rounded-lg"
                        >
                            {icons::CREDIT_CARD}
                            " Proceed to Payment"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
