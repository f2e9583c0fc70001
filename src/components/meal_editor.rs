//! Meal Editor Component
//!
//! Date picker plus editable (time, food) rows and the submit button.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_dashboard;
use crate::dates::{clamp_to_today, format_iso_date, parse_input_date, today};
use crate::editor::MealEditor;
use crate::models::MealField;
use crate::status::Operation;

#[component]
pub fn MealEditorPanel() -> impl IntoView {
    let ctx = use_dashboard();

    let editor = ctx.editor;
    let selected_date = ctx.selected_date;

    let on_date = move |ev: web_sys::Event| {
        match parse_input_date(&event_target_value(&ev)) {
            Some(date) => selected_date.set(clamp_to_today(date, today())),
            None => log::debug!("[EDITOR] ignoring unparseable date input"),
        }
    };

    let submitting = move || ctx.status.with(|s| s.is_loading_op(&Operation::Submit));
    let on_submit = move |_| actions::submit_meals(ctx);

    view! {
        <section class="add-meal-container">
            <div class="form-header">
                <h2>"🍴 Log Your Meals"</h2>
                <div class="date-selector">
                    <span class="calendar-icon">"📅"</span>
                    <input
                        type="date"
                        class="date-picker"
                        max=move || format_iso_date(today())
                        prop:value=move || format_iso_date(selected_date.get())
                        on:change=on_date
                    />
                </div>
            </div>

            <div class="meal-form">
                <div class="meal-form-header">
                    <div class="meal-time-header">"Time"</div>
                    <div class="meal-food-header">"What did you eat?"</div>
                    <div class="meal-action-header">"Action"</div>
                </div>

                <For
                    each=move || editor.with(MealEditor::keys)
                    key=|key| *key
                    children=move |key| view! { <MealRowInput editor=editor row_key=key /> }
                />

                <div class="meal-form-footer">
                    <button class="add-row-btn" on:click=move |_| editor.update(MealEditor::add_entry)>
                        "➕ Add Another Meal"
                    </button>
                    <button
                        class="submit-meals-btn"
                        disabled=move || ctx.is_loading()
                        on:click=on_submit
                    >
                        {move || if submitting() { "Submitting..." } else { "Submit Meals" }}
                    </button>
                </div>
            </div>

            <div class="meal-info-section">
                <div class="meal-info-card">
                    <h3>"Why Track Your Meals?"</h3>
                    <p>"Tracking your daily food intake helps you maintain a healthy diet and understand your nutrition habits better."</p>
                </div>
                <div class="meal-info-card">
                    <h3>"Get Personalized Insights"</h3>
                    <p>"Our AI will analyze your meals and provide quality scores and personalized recommendations."</p>
                </div>
            </div>
        </section>
    }
}

/// One editable row, addressed by its stable key
#[component]
fn MealRowInput(editor: RwSignal<MealEditor>, row_key: u32) -> impl IntoView {
    let ctx = use_dashboard();

    let value_of = move |field: MealField| {
        editor.with(|e| {
            e.entry_by_key(row_key)
                .map(|entry| match field {
                    MealField::Time => entry.time.clone(),
                    MealField::Food => entry.food.clone(),
                })
                .unwrap_or_default()
        })
    };

    let change = move |field: MealField, value: String| {
        editor.update(|e| {
            if let Some(index) = e.position(row_key) {
                e.change_entry(index, field, value);
            }
        });
    };

    let remove = move |_| {
        let mut outcome = Ok(());
        editor.update(|e| {
            if let Some(index) = e.position(row_key) {
                outcome = e.remove_entry(index);
            }
        });
        if let Err(e) = outcome {
            ctx.notifier.error(e.to_string());
        }
    };

    view! {
        <div class="meal-row">
            <div class="meal-time">
                <input
                    type="text"
                    placeholder="e.g. 08:00 AM"
                    prop:value=move || value_of(MealField::Time)
                    on:input=move |ev| change(MealField::Time, event_target_value(&ev))
                />
            </div>
            <div class="meal-food">
                <input
                    type="text"
                    placeholder="e.g. Oatmeal with berries"
                    prop:value=move || value_of(MealField::Food)
                    on:input=move |ev| change(MealField::Food, event_target_value(&ev))
                />
            </div>
            <div class="meal-action">
                <button class="remove-meal-btn" title="Remove meal" on:click=remove>"🗑"</button>
            </div>
        </div>
    }
}
