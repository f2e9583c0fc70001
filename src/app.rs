//! NutriTrack Frontend App
//!
//! Router plus the app-wide toast stack.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Notifier, ToastContainer};
use crate::pages::{Home, Login};

#[component]
pub fn App() -> impl IntoView {
    // Toasts outlive page changes (logout shows one, then navigates)
    let notifier = Notifier::new();
    provide_context(notifier);

    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/login") view=Login />
                </Routes>
            </main>
        </Router>
        <ToastContainer notifier=notifier />
    }
}
