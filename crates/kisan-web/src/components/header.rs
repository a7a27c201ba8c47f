//! Site header with navigation and the quick-enroll entry point

use kisan_core::EnrollDialogForm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::EnrollDialog;
use crate::state::EnrollDraft;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/#about", "About Us"),
    ("/plans", "Plans"),
    ("/#testimonials", "Success Stories"),
    ("/callback", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (dialog_open, set_dialog_open) = signal(false);
    let draft = use_context::<EnrollDraft>().unwrap_or_default();
    let navigate = StoredValue::new_local(use_navigate());

    let close_menu = move |_| set_menu_open.set(false);
    let open_dialog = move |_| {
        set_menu_open.set(false);
        set_dialog_open.set(true);
    };

    let on_submit = Callback::new(move |form: EnrollDialogForm| {
        draft.store(form);
        set_dialog_open.set(false);
        navigate.with_value(|navigate| navigate("/enroll", Default::default()));
    });

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16">
                <a href="/" class="flex items-center gap-2 text-2xl font-bold text-green-700">
                    <span>"🌱"</span>
                    "KisanEdge"
                </a>

                <nav class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="text-gray-700 hover:text-green-700 font-medium">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="bg-green-600 hover:bg-green-700 text-white font-semibold px-5 py-2 rounded-full"
                        on:click=open_dialog
                    >
                        "Get Started"
                    </button>
                </nav>

                <button
                    class="md:hidden text-2xl text-gray-700"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="md:hidden bg-white border-t px-4 py-4 flex flex-col gap-4">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="text-gray-700 font-medium" on:click=close_menu>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="bg-green-600 text-white font-semibold px-5 py-2 rounded-full"
                        on:click=open_dialog
                    >
                        "Get Started"
                    </button>
                </nav>
            </Show>

            <EnrollDialog
                open=dialog_open
                on_close=Callback::new(move |_: ()| set_dialog_open.set(false))
                on_submit=on_submit
            />
        </header>
    }
}
