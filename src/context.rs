//! Dashboard Context
//!
//! Shared state provided via Leptos Context API.

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Notifier;
use crate::dates::today;
use crate::editor::MealEditor;
use crate::models::Tab;
use crate::session::Session;
use crate::status::{OpStatus, Operation};
use crate::store::{ReportStore, ReportsState};

/// Dashboard-wide handles, created once the session gate has passed
#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// Signed-in user
    pub session: StoredValue<Session>,
    /// Status of the single in-flight operation
    pub status: RwSignal<OpStatus>,
    /// Which tab is showing
    pub active_tab: RwSignal<Tab>,
    /// Meal rows being edited; survives tab switches
    pub editor: RwSignal<MealEditor>,
    /// Date the meals are logged for, never after today
    pub selected_date: RwSignal<NaiveDate>,
    /// Fetched reports
    pub reports: ReportStore,
    /// Toasts
    pub notifier: Notifier,
}

impl DashboardContext {
    pub fn new(session: Session, notifier: Notifier) -> Self {
        Self {
            session: StoredValue::new(session),
            status: RwSignal::new(OpStatus::Idle),
            active_tab: RwSignal::new(Tab::AddMeal),
            editor: RwSignal::new(MealEditor::new()),
            selected_date: RwSignal::new(today()),
            reports: Store::new(ReportsState::default()),
            notifier,
        }
    }

    /// Mark `op` as loading. False while another operation is still running.
    pub fn begin(&self, op: Operation) -> bool {
        let mut started = false;
        let requested = op.clone();
        self.status.update(|status| started = status.try_begin(op));
        if !started {
            log::debug!("[DASHBOARD] {:?} ignored, another request is in flight", requested);
        }
        started
    }

    /// Clear loading with the operation's outcome
    pub fn finish(&self, outcome: Result<(), String>) {
        self.status.update(|status| status.finish(outcome));
    }

    pub fn is_loading(&self) -> bool {
        self.status.with(OpStatus::is_loading)
    }

    pub fn show_tab(&self, tab: Tab) {
        self.active_tab.set(tab);
    }
}

/// Get the dashboard context
pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}
