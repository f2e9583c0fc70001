//! Report Browser Component
//!
//! Weekly/monthly toggle, overall score and the report list.

use leptos::prelude::*;

use crate::actions;
use crate::components::ReportCard;
use crate::context::use_dashboard;
use crate::models::{ReportWindow, Tab};
use crate::score::{format_score, score_to_category, score_to_color_class};
use crate::store::ReportsStateStoreFields;

const WINDOWS: [ReportWindow; 2] = [ReportWindow::Weekly, ReportWindow::Monthly];

#[component]
pub fn ReportBrowser() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.reports;

    view! {
        <section class="reports-container">
            <div class="reports-header">
                <h2>"📋 Your Nutrition Reports"</h2>
                <div class="report-type-toggle">
                    {WINDOWS.iter().map(|&window| {
                        let toggle_class = move || {
                            if store.window().get() == window { "report-toggle-btn active" } else { "report-toggle-btn" }
                        };
                        view! {
                            <button
                                class=toggle_class
                                disabled=move || ctx.is_loading()
                                on:click=move |_| actions::fetch_reports(ctx, window)
                            >
                                {window.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <OverallScore />

            {move || if store.reports().with(Vec::is_empty) {
                view! {
                    <div class="no-reports">
                        <span class="no-reports-icon">"🍴"</span>
                        <h3>"No Reports Yet"</h3>
                        <p>"Start tracking your meals to see nutrition reports here."</p>
                        <button class="add-meals-btn" on:click=move |_| ctx.show_tab(Tab::AddMeal)>
                            "Add Your Meals"
                        </button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="reports-list">
                        <For
                            each=move || store.reports().get()
                            key=|report| report.id.clone()
                            children=move |report| view! { <ReportCard report=report /> }
                        />
                    </div>
                }.into_any()
            }}
        </section>
    }
}

/// Aggregate score for the active window; hidden when there are no reports
#[component]
fn OverallScore() -> impl IntoView {
    let store = use_dashboard().reports;

    move || store.average_score().get().map(|score| {
        let window = store.window().get();
        view! {
            <div class=format!("overall-score {}", score_to_color_class(score))>
                <div class="score-circle">
                    <span class="score-value">{format_score(score)}</span>
                </div>
                <div class="score-details">
                    <h3>"Overall Nutrition Score"</h3>
                    <p class="score-category">{score_to_category(score)}</p>
                    <p class="score-period">{window.period_label()}</p>
                </div>
            </div>
        }
    })
}
