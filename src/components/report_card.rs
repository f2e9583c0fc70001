//! Report Card Component
//!
//! One day's report: date, score, AI message and scored meals.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_dashboard;
use crate::dates::format_report_date;
use crate::models::{MealReport, ScoredMeal};
use crate::score::{format_score, score_to_color_class};

/// Display strings for a card header. The message is shown as plain text.
#[derive(Debug, Clone, PartialEq)]
struct CardSummary {
    class: String,
    date: String,
    score: String,
    message: String,
}

impl CardSummary {
    fn of(report: &MealReport) -> Self {
        Self {
            class: format!("report-card {}", score_to_color_class(report.average_score)),
            date: format_report_date(&report.date),
            score: format_score(report.average_score),
            message: report.message.clone(),
        }
    }
}

#[component]
pub fn ReportCard(report: MealReport) -> impl IntoView {
    let ctx = use_dashboard();
    let CardSummary { class, date, score, message } = CardSummary::of(&report);
    let MealReport { id, meals, .. } = report;

    let on_delete = move |_| actions::delete_report(ctx, id.clone());

    view! {
        <article class=class>
            <div class="report-header">
                <div class="report-date">
                    <span class="calendar-icon">"📅"</span>
                    <span>{date}</span>
                </div>
                <div class="report-score">
                    <span class="score-label">"Score"</span>
                    <span class="score-value">{score}</span>
                </div>
                <button
                    class="delete-report-btn"
                    title="Delete report"
                    disabled=move || ctx.is_loading()
                    on:click=on_delete
                >
                    "🗑"
                </button>
            </div>

            <p class="report-message">{message}</p>

            <div class="report-meals">
                <h4>"Meals"</h4>
                <div class="meals-list">
                    {meals.into_iter().map(meal_item).collect_view()}
                </div>
            </div>
        </article>
    }
}

fn meal_item(meal: ScoredMeal) -> impl IntoView {
    let quality_class = format!("meal-quality {}", score_to_color_class(meal.quality_score));
    view! {
        <div class="meal-item">
            <div class="meal-time-info"><span>{meal.time}</span></div>
            <div class="meal-food-info"><span>{meal.food}</span></div>
            <div class="meal-score-info">
                <span class=quality_class>{format_score(meal.quality_score)}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(message: &str) -> MealReport {
        MealReport {
            id: "r1".to_string(),
            date: "2025-01-05T00:00:00.000Z".to_string(),
            meals: Vec::new(),
            average_score: 79.96,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_summary_formats_header() {
        let summary = CardSummary::of(&report("Good day"));
        assert_eq!(summary.class, "report-card good");
        assert_eq!(summary.date, "Sun, Jan 5, 2025");
        assert_eq!(summary.score, "79.9");
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        for text in [
            "[tips](javascript:alert(document.cookie))",
            "Eat *less* salt",
            "<img src=x onerror=alert(1)>",
        ] {
            assert_eq!(CardSummary::of(&report(text)).message, text);
        }
    }
}
