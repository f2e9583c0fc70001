//! Tab Bar Component
//!
//! Switches between the meal editor and the report list.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_dashboard;
use crate::models::Tab;

const TABS: &[(Tab, &str)] = &[(Tab::AddMeal, "🍴 Add Meals"), (Tab::Reports, "📈 View Reports")];

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_dashboard();

    let select = move |tab: Tab| {
        ctx.show_tab(tab);
        // Opening the reports tab always refreshes the active window
        if tab == Tab::Reports {
            actions::refresh_reports(ctx);
        }
    };

    view! {
        <nav class="tabs">
            {TABS.iter().map(|&(tab, label)| {
                let tab_class = move || {
                    if ctx.active_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                };
                view! {
                    <button class=tab_class on:click=move |_| select(tab)>
                        {label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
