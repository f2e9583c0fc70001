//! Dashboard Header Component
//!
//! Brand, greeting and logout button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::context::use_dashboard;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_dashboard();
    let navigate = use_navigate();
    let username = ctx.session.with_value(|s| s.username.clone());

    let on_logout = move |_| actions::logout(ctx, navigate.clone());

    view! {
        <header class="header">
            <div class="logo">
                <span class="logo-icon">"🍃"</span>
                <h1>"NutriTrack"</h1>
            </div>
            <div class="user-controls">
                <span class="welcome-text">"Welcome, " {username}</span>
                <button class="logout-btn" on:click=on_logout>"Logout"</button>
            </div>
        </header>
    }
}
