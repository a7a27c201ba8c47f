//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Footer, Header};
use crate::pages::{CallbackPage, EnrollPage, HomePage, PlansPage};
use crate::state::EnrollDraft;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(EnrollDraft::new());

    view! {
        <Router>
            <div class="min-h-screen bg-background relative">
                <Header />
                <main class="relative z-10 pt-16">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/plans") view=PlansPage />
                        <Route path=path!("/callback") view=CallbackPage />
                        <Route path=path!("/enroll") view=EnrollPage />
                    </Routes>
                    <Footer />
                </main>
            </div>
        </Router>
    }
}
