//! Login Page
//!
//! Landing spot for signed-out users. Sign-in itself is handled elsewhere.

use leptos::prelude::*;

#[component]
pub fn Login() -> impl IntoView {
    view! {
        <div class="login-container">
            <h1>"NutriTrack"</h1>
            <p>"Please sign in to log your meals and view your nutrition reports."</p>
        </div>
    }
}
