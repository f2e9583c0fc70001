//! Dashboard Actions
//!
//! Request flows shared by the tabs: fetch, submit, delete and logout.
//! Each flow is an async fn over a [`ReportService`]; the `pub fn` wrappers
//! spawn it against [`HttpReports`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;

use crate::api::{HttpReports, ReportService};
use crate::config::LOGOUT_REDIRECT_DELAY_MS;
use crate::context::DashboardContext;
use crate::editor::MealEditor;
use crate::error::{CREATE_FALLBACKS, DELETE_FALLBACKS, FETCH_FALLBACKS};
use crate::models::ReportWindow;
use crate::session::{local_storage, Session};
use crate::status::Operation;
use crate::store::{store_apply_page, ReportsStateStoreFields};

pub fn fetch_reports(ctx: DashboardContext, window: ReportWindow) {
    spawn_local(async move { fetch_reports_with(ctx, &HttpReports, window).await });
}

/// Re-fetch whichever window is showing
pub fn refresh_reports(ctx: DashboardContext) {
    spawn_local(async move { refresh_reports_with(ctx, &HttpReports).await });
}

pub fn submit_meals(ctx: DashboardContext) {
    spawn_local(async move { submit_meals_with(ctx, &HttpReports).await });
}

pub fn delete_report(ctx: DashboardContext, id: String) {
    spawn_local(async move { delete_report_with(ctx, &HttpReports, id).await });
}

/// Load `window` into the report store. Prior reports are kept on failure.
pub async fn fetch_reports_with<S: ReportService>(ctx: DashboardContext, service: &S, window: ReportWindow) {
    if !ctx.begin(Operation::Fetch) {
        return;
    }
    let session = ctx.session.get_value();

    match service.list_reports(&session, window).await {
        Ok(page) => {
            log::info!("[REPORTS] loaded {} {:?} reports", page.reports.len(), window);
            store_apply_page(&ctx.reports, window, page);
            ctx.finish(Ok(()));
        }
        Err(e) => {
            log::warn!("[REPORTS] fetch failed: {}", e);
            let message = e.user_message(&FETCH_FALLBACKS);
            ctx.notifier.error(message.clone());
            ctx.finish(Err(message));
        }
    }
}

pub async fn refresh_reports_with<S: ReportService>(ctx: DashboardContext, service: &S) {
    let window = ctx.reports.window().get_untracked();
    fetch_reports_with(ctx, service, window).await;
}

/// Validate the editor and create a report for the selected date.
///
/// Incomplete rows are reported without touching the network. On success the
/// editor goes back to its default rows and the active window is reloaded.
pub async fn submit_meals_with<S: ReportService>(ctx: DashboardContext, service: &S) {
    let editor = ctx.editor;
    let date = ctx.selected_date.get_untracked();
    let session = ctx.session.get_value();
    let request = match editor.with_untracked(|e| e.build_request(&session.user_id, date)) {
        Ok(request) => request,
        Err(e) => {
            ctx.notifier.error(e.to_string());
            return;
        }
    };
    if !ctx.begin(Operation::Submit) {
        return;
    }

    match service.create_report(&session, &request).await {
        Ok(()) => {
            log::info!("[EDITOR] report created for {}", request.date);
            ctx.notifier.success("Meal report created successfully");
            editor.update(MealEditor::reset);
            ctx.finish(Ok(()));
            refresh_reports_with(ctx, service).await;
        }
        Err(e) => {
            log::warn!("[EDITOR] submit failed: {}", e);
            let message = e.user_message(&CREATE_FALLBACKS);
            ctx.notifier.error(message.clone());
            ctx.finish(Err(message));
        }
    }
}

pub async fn delete_report_with<S: ReportService>(ctx: DashboardContext, service: &S, id: String) {
    if !ctx.begin(Operation::Delete(id.clone())) {
        return;
    }
    let session = ctx.session.get_value();

    match service.delete_report(&session, &id).await {
        Ok(()) => {
            log::info!("[REPORTS] deleted {}", id);
            ctx.notifier.success("Report deleted successfully");
            ctx.finish(Ok(()));
            refresh_reports_with(ctx, service).await;
        }
        Err(e) => {
            log::warn!("[REPORTS] delete {} failed: {}", id, e);
            let message = e.user_message(&DELETE_FALLBACKS);
            ctx.notifier.error(message.clone());
            ctx.finish(Err(message));
        }
    }
}

/// Drop the stored session and leave for the login page after a short delay
pub fn logout<F>(ctx: DashboardContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    match local_storage() {
        Some(storage) => Session::clear(&storage),
        None => log::warn!("[SESSION] localStorage unavailable, nothing to clear"),
    }
    log::info!("[SESSION] {} logged out", ctx.session.with_value(|s| s.username.clone()));
    ctx.notifier.success("Successfully logged out");

    spawn_local(async move {
        TimeoutFuture::new(LOGOUT_REDIRECT_DELAY_MS).await;
        navigate("/login", NavigateOptions::default());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use chrono::NaiveDate;
    use futures::executor::block_on;

    use crate::api::{CreateReportRequest, ReportPage};
    use crate::components::{Notifier, ToastKind};
    use crate::error::ApiError;
    use crate::models::{MealEntry, MealField, MealReport};
    use crate::status::OpStatus;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(CreateReportRequest),
        List(ReportWindow),
        Delete(String),
    }

    /// Records every call; answers with the configured outcomes
    #[derive(Default)]
    struct FakeReports {
        calls: RefCell<Vec<Call>>,
        page: ReportPage,
        fail_create: bool,
        fail_list: bool,
        fail_delete: bool,
    }

    impl FakeReports {
        fn serving(page: ReportPage) -> Self {
            Self { page, ..Self::default() }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl ReportService for FakeReports {
        async fn create_report(&self, _session: &Session, body: &CreateReportRequest) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Create(body.clone()));
            if self.fail_create {
                return Err(ApiError::Rejected { message: Some("Daily limit reached".into()) });
            }
            Ok(())
        }

        async fn list_reports(&self, _session: &Session, window: ReportWindow) -> Result<ReportPage, ApiError> {
            self.calls.borrow_mut().push(Call::List(window));
            if self.fail_list {
                return Err(ApiError::Network("offline".into()));
            }
            Ok(self.page.clone())
        }

        async fn delete_report(&self, _session: &Session, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Delete(id.to_string()));
            if self.fail_delete {
                return Err(ApiError::Http { status: 500, message: None });
            }
            Ok(())
        }
    }

    fn report(id: &str, score: f64) -> MealReport {
        MealReport {
            id: id.to_string(),
            date: "2025-01-05".to_string(),
            meals: Vec::new(),
            average_score: score,
            message: String::new(),
        }
    }

    fn page(ids: &[&str]) -> ReportPage {
        ReportPage {
            reports: ids.iter().map(|id| report(id, 70.0)).collect(),
            average_score: if ids.is_empty() { None } else { Some(70.0) },
        }
    }

    fn dashboard() -> DashboardContext {
        let session = Session {
            user_id: "u-42".to_string(),
            username: "Ana".to_string(),
            auth_token: "jwt".to_string(),
        };
        let ctx = DashboardContext::new(session, Notifier::new());
        ctx.selected_date.set(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        ctx
    }

    fn fill_editor(ctx: &DashboardContext) {
        ctx.editor.update(|e| {
            for (i, food) in ["Oatmeal", "Salad", "Apple", "Soup"].into_iter().enumerate() {
                e.change_entry(i, MealField::Food, food);
            }
        });
    }

    fn last_toast(ctx: &DashboardContext) -> Option<(ToastKind, String)> {
        ctx.notifier.messages().pop()
    }

    fn report_ids(ctx: &DashboardContext) -> Vec<String> {
        ctx.reports.reports().get_untracked().into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_incomplete_submit_sends_nothing() {
        let ctx = dashboard();
        let service = FakeReports::default();
        ctx.editor.update(|e| e.change_entry(0, MealField::Food, "Oatmeal"));

        block_on(submit_meals_with(ctx, &service));

        assert!(service.calls().is_empty());
        assert_eq!(ctx.status.get_untracked(), OpStatus::Idle);
        assert_eq!(
            last_toast(&ctx),
            Some((ToastKind::Error, "Please fill in all meal details".to_string()))
        );
    }

    #[test]
    fn test_submit_resets_editor_then_refetches_active_window() {
        let ctx = dashboard();
        *ctx.reports.window().write() = ReportWindow::Monthly;
        fill_editor(&ctx);
        let service = FakeReports::serving(page(&["a", "b"]));

        block_on(submit_meals_with(ctx, &service));

        let calls = service.calls();
        assert_eq!(calls.len(), 2);
        let Call::Create(request) = &calls[0] else {
            panic!("expected create first, got {:?}", calls);
        };
        assert_eq!(request.user_id, "u-42");
        assert_eq!(request.date, "2025-01-05");
        assert_eq!(request.meals[1], MealEntry::new("12:30 PM", "Salad"));
        assert_eq!(calls[1], Call::List(ReportWindow::Monthly));

        assert_eq!(ctx.editor.with_untracked(MealEditor::entries), MealEditor::new().entries());
        assert_eq!(report_ids(&ctx), vec!["a", "b"]);
        assert!(!ctx.is_loading());
        assert!(ctx
            .notifier
            .messages()
            .contains(&(ToastKind::Success, "Meal report created successfully".to_string())));
    }

    #[test]
    fn test_rejected_submit_keeps_rows() {
        let ctx = dashboard();
        fill_editor(&ctx);
        let before = ctx.editor.get_untracked();
        let service = FakeReports { fail_create: true, ..FakeReports::default() };

        block_on(submit_meals_with(ctx, &service));

        assert_eq!(service.calls().len(), 1);
        assert_eq!(ctx.editor.get_untracked(), before);
        assert_eq!(
            ctx.status.get_untracked(),
            OpStatus::Failed(Operation::Submit, "Daily limit reached".to_string())
        );
        assert_eq!(last_toast(&ctx), Some((ToastKind::Error, "Daily limit reached".to_string())));
    }

    #[test]
    fn test_delete_refetches_active_window() {
        let ctx = dashboard();
        store_apply_page(&ctx.reports, ReportWindow::Weekly, page(&["a", "b"]));
        let service = FakeReports::serving(page(&["b"]));

        block_on(delete_report_with(ctx, &service, "a".to_string()));

        assert_eq!(
            service.calls(),
            vec![Call::Delete("a".to_string()), Call::List(ReportWindow::Weekly)]
        );
        assert_eq!(report_ids(&ctx), vec!["b"]);
        assert!(!ctx.is_loading());
    }

    #[test]
    fn test_failed_fetch_keeps_prior_reports() {
        let ctx = dashboard();
        store_apply_page(&ctx.reports, ReportWindow::Weekly, page(&["a"]));
        let service = FakeReports { fail_list: true, ..FakeReports::default() };

        block_on(fetch_reports_with(ctx, &service, ReportWindow::Monthly));

        assert_eq!(service.calls(), vec![Call::List(ReportWindow::Monthly)]);
        assert_eq!(report_ids(&ctx), vec!["a"]);
        assert_eq!(ctx.reports.window().get_untracked(), ReportWindow::Weekly);
        assert!(!ctx.is_loading());
        assert_eq!(last_toast(&ctx), Some((ToastKind::Error, "Error fetching reports".to_string())));
    }

    #[test]
    fn test_failed_delete_clears_loading() {
        let ctx = dashboard();
        store_apply_page(&ctx.reports, ReportWindow::Weekly, page(&["a"]));
        let service = FakeReports { fail_delete: true, ..FakeReports::default() };

        block_on(delete_report_with(ctx, &service, "a".to_string()));

        assert_eq!(service.calls(), vec![Call::Delete("a".to_string())]);
        assert_eq!(report_ids(&ctx), vec!["a"]);
        assert!(!ctx.is_loading());
        assert_eq!(last_toast(&ctx), Some((ToastKind::Error, "Error deleting report".to_string())));
    }

    #[test]
    fn test_requests_refused_while_loading() {
        let ctx = dashboard();
        fill_editor(&ctx);
        let service = FakeReports::default();
        assert!(ctx.begin(Operation::Fetch));

        block_on(submit_meals_with(ctx, &service));
        block_on(delete_report_with(ctx, &service, "a".to_string()));

        assert!(service.calls().is_empty());
        assert_eq!(ctx.status.get_untracked(), OpStatus::Loading(Operation::Fetch));
    }
}
