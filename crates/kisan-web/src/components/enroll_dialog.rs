//! Quick-enroll dialog
//!
//! Collects the farmer's basics and hands them to the enroll page. Nothing is
//! posted from here.

use kisan_core::forms::FPC_OPTIONS;
use kisan_core::{Attachment, EnrollDialogForm};
use leptos::{logging, prelude::*};

use super::{file_of, text_of, FileInputField, InputField, SelectField, TextareaField};

#[component]
pub fn EnrollDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<EnrollDialogForm>,
) -> impl IntoView {
    let form = RwSignal::new(EnrollDialogForm::default());
    let (error, set_error) = signal(None::<String>);

    let on_input = Callback::new(move |(name, value): (&'static str, String)| {
        form.update(|f| {
            if let Err(e) = f.set(name, value) {
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

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        match current.validate() {
            Ok(()) => {
                set_error.set(None);
                on_submit.run(current);
                form.set(EnrollDialogForm::default());
            }
            Err(e) => set_error.set(Some(e.user_message())),
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4">
                <div class="bg-white rounded-xl shadow-2xl w-full max-w-lg max-h-[90vh] overflow-y-auto p-6">
                    <div class="flex justify-between items-center mb-4">
                        <h2 class="text-2xl font-bold text-green-800">"Enroll with KisanEdge"</h2>
                        <button
                            class="text-gray-500 hover:text-gray-800 text-xl"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>

                    <form class="space-y-4" on:submit=submit>
                        <InputField label="Name" name="name" value=text_of(form, |f| &f.name) on_input=on_input required=true />
                        <InputField
                            label="Mobile Number"
                            name="mobile"
                            input_type="tel"
                            value=text_of(form, |f| &f.mobile)
                            on_input=on_input
                            pattern=r"^(?:(?:\+|0{0,2})91(\s*[\-]\s*)?|[0]?)?[789]\d{9}$"
                            maxlength="10"
                            required=true
                        />
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            <InputField label="District" name="district" value=text_of(form, |f| &f.district) on_input=on_input required=true />
                            <InputField label="Taluka" name="taluka" value=text_of(form, |f| &f.taluka) on_input=on_input required=true />
                            <InputField label="Village" name="village" value=text_of(form, |f| &f.village) on_input=on_input required=true />
                        </div>
                        <SelectField
                            label="FPC Option"
                            name="fpcOption"
                            options=&FPC_OPTIONS
                            value=text_of(form, |f| &f.fpc_option)
                            on_change=on_input
                            required=true
                        />
                        <TextareaField
                            label="Farm Detail"
                            name="farmDetail"
                            value=text_of(form, |f| &f.farm_detail)
                            on_input=on_input
                            placeholder="Crops, acreage, irrigation..."
                        />
                        <InputField
                            label="Aadhaar Number"
                            name="aadhar"
                            value=text_of(form, |f| &f.aadhaar)
                            on_input=on_input
                            required=true
                            pattern="^[2-9]{1}[0-9]{11}$"
                            maxlength="12"
                        />
                        <FileInputField
                            label="Aadhaar Card"
                            name="aadharFile"
                            file_name=file_of(form, |f| &f.aadhaar_file)
                            on_pick=on_pick
                        />
                        <FileInputField
                            label="7/12 Extract"
                            name="sevenTwelveFile"
                            file_name=file_of(form, |f| &f.seven_twelve_file)
                            on_pick=on_pick
                        />

                        {move || error.get().map(|message| view! { <p class="text-sm text-red-600">{message}</p> })}

                        <div class="flex justify-end gap-3 pt-2">
                            <button
                                type="button"
                                class="px-4 py-2 rounded-md border border-gray-300 text-gray-700"
                                on:click=move |_| on_close.run(())
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="px-4 py-2 rounded-md bg-green-600 hover:bg-green-700 text-white font-semibold"
                            >
                                "Continue"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
