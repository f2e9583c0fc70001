//! Home Page
//!
//! Session gate plus the meal dashboard behind it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::actions;
use crate::components::{Header, MealEditorPanel, Notifier, ReportBrowser, TabBar};
use crate::context::DashboardContext;
use crate::models::{ReportWindow, Tab};
use crate::session::{check_session, local_storage, GateDecision, Session};

/// Entry page: either redirects to login or shows the dashboard, never both
#[component]
pub fn Home() -> impl IntoView {
    let decision = match local_storage() {
        Some(storage) => check_session(&storage),
        None => GateDecision::RedirectToLogin,
    };

    match decision {
        GateDecision::RedirectToLogin => {
            log::info!("[GATE] no signed-in user, redirecting to login");
            let navigate = use_navigate();
            Effect::new(move |_| navigate("/login", NavigateOptions::default()));
            ().into_any()
        }
        GateDecision::Proceed(session) => view! { <MealDashboard session=session /> }.into_any(),
    }
}

#[component]
fn MealDashboard(session: Session) -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let ctx = DashboardContext::new(session, notifier);
    provide_context(ctx);

    // Initial load always shows the weekly window
    Effect::new(move |_| actions::fetch_reports(ctx, ReportWindow::Weekly));

    view! {
        <div class="home-container">
            <Header />
            <div class="main-content">
                <TabBar />
                {move || match ctx.active_tab.get() {
                    Tab::AddMeal => view! { <MealEditorPanel /> }.into_any(),
                    Tab::Reports => view! { <ReportBrowser /> }.into_any(),
                }}
            </div>
            <footer class="footer">
                <p>"© 2025 NutriTrack. All rights reserved."</p>
            </footer>
        </div>
    }
}
