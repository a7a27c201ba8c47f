//! Form inputs
//!
//! Each input reports changes as `(name, value)` so a page can route every
//! field through its form's name-keyed setter.

use kisan_core::forms::{SelectOption, ACCEPTED_UPLOADS};
use kisan_core::Attachment;
use leptos::{logging, prelude::*, task::spawn_local};

use crate::api;

/// Read one text field of a form held in a signal
pub fn text_of<T>(form: RwSignal<T>, field: fn(&T) -> &String) -> Signal<String>
where
    T: Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| field(f).clone()))
}

/// Name of the file attached to a form slot, if any
pub fn file_of<T>(form: RwSignal<T>, slot: fn(&T) -> &Option<Attachment>) -> Signal<Option<String>>
where
    T: Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| slot(f).as_ref().map(|a| a.file_name.clone())))
}

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-600 transition duration-200";

#[component]
fn FieldLabel(label: &'static str, name: &'static str, required: bool) -> impl IntoView {
    view! {
        <label for=name class="block text-sm font-medium text-gray-700 mb-1">
            {label}
            {required.then(|| view! { " " <span class="text-red-500">"*"</span> })}
        </label>
    }
}

#[component]
pub fn InputField(
    label: &'static str,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<(&'static str, String)>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] pattern: Option<&'static str>,
    #[prop(optional)] maxlength: Option<&'static str>,
) -> impl IntoView {
    let is_disabled = move || disabled.get();

    view! {
        <div>
            <FieldLabel label=label name=name required=required />
            <input
                type=input_type
                id=name
                name=name
                required=required
                disabled=is_disabled
                placeholder=placeholder
                pattern=pattern
                maxlength=maxlength
                class=move || {
                    if is_disabled() {
                        format!("{INPUT_CLASS} bg-gray-100 cursor-not-allowed")
                    } else {
                        INPUT_CLASS.to_string()
                    }
                }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn TextareaField(
    label: &'static str,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<(&'static str, String)>,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u8,
) -> impl IntoView {
    view! {
        <div>
            <FieldLabel label=label name=name required=required />
            <textarea
                id=name
                name=name
                required=required
                rows=rows.to_string()
                placeholder=placeholder
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
            ></textarea>
        </div>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    options: &'static [SelectOption],
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<(&'static str, String)>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <FieldLabel label=label name=name required=required />
            <select
                id=name
                name=name
                required=required
                class=INPUT_CLASS
                on:change=move |ev| on_change.run((name, event_target_value(&ev)))
            >
                {options
                    .iter()
                    .map(|option| {
                        view! {
                            <option
                                value=option.value
                                selected=move || value.get() == option.value
                            >
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn CheckboxField(
    label: &'static str,
    id: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<(&'static str, bool)>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <input
                type="checkbox"
                id=id
                name=id
                required=required
                class="h-4 w-4 text-green-600 border-gray-300 rounded"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run((id, event_target_checked(&ev)))
            />
            <label for=id class="text-sm text-gray-700">
                {label}
                {required.then(|| view! { " " <span class="text-red-500">"*"</span> })}
            </label>
        </div>
    }
}

/// File picker; the chosen file is read into memory before it is reported
#[component]
pub fn FileInputField(
    label: &'static str,
    name: &'static str,
    #[prop(into)] file_name: Signal<Option<String>>,
    #[prop(into)] on_pick: Callback<(&'static str, Option<Attachment>)>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get();

    let on_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let picked = input.files().and_then(|files| files.get(0));
        spawn_local(async move {
            let attachment = match picked {
                Some(file) => match api::read_attachment(&file).await {
                    Ok(attachment) => Some(attachment),
                    Err(e) => {
                        logging::error!("{e}");
                        None
                    }
                },
                None => None,
            };
            on_pick.run((name, attachment));
        });
    };

    view! {
        <div>
            <FieldLabel label=label name=name required=false />
            <input
                type="file"
                id=name
                name=name
                accept=ACCEPTED_UPLOADS
                disabled=is_disabled
                class=move || {
                    let base = "block w-full text-sm text-gray-600 border border-gray-300 rounded-md p-2 cursor-pointer";
                    if is_disabled() {
                        format!("{base} bg-gray-100 cursor-not-allowed")
                    } else {
                        base.to_string()
                    }
                }
                on:change=on_change
            />
            {move || {
                file_name
                    .get()
                    .map(|name| view! { <p class="mt-1 text-sm text-gray-500">"Selected: " {name}</p> })
            }}
        </div>
    }
}
