//! Report Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ReportPage;
use crate::models::{MealReport, ReportWindow};

/// Last successfully fetched report window
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ReportsState {
    /// Reports in the active window, newest first as served
    pub reports: Vec<MealReport>,
    /// Aggregate score; `None` when `reports` is empty
    pub average_score: Option<f64>,
    /// Window the list belongs to
    pub window: ReportWindow,
}

/// Type alias for the store
pub type ReportStore = Store<ReportsState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the stored window with a fetched page, one field at a time
pub fn store_apply_page(store: &ReportStore, window: ReportWindow, page: ReportPage) {
    let ReportPage { reports, average_score } = page;
    *store.reports().write() = reports;
    *store.average_score().write() = average_score;
    *store.window().write() = window;
}
