//! Report Endpoints
//!
//! Create, list and delete daily meal reports.

use gloo_net::http::Request;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::{endpoint, read_response};
use crate::error::ApiError;
use crate::models::{MealEntry, MealReport, ReportWindow};
use crate::session::Session;

// ========================
// Schemas
// ========================

/// Body of `POST /report/create`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub user_id: String,
    pub date: String,
    pub meals: Vec<MealEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportListResponse {
    #[serde(default)]
    reports: Vec<MealReport>,
    #[serde(default)]
    average_score: Option<f64>,
}

/// Reports for one window plus their aggregate score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPage {
    pub reports: Vec<MealReport>,
    /// `None` whenever `reports` is empty
    pub average_score: Option<f64>,
}

impl ReportListResponse {
    fn into_page(self) -> ReportPage {
        let average_score = if self.reports.is_empty() {
            None
        } else {
            self.average_score.filter(|score| score.is_finite())
        };
        ReportPage {
            reports: self.reports,
            average_score,
        }
    }
}

fn require_token(session: &Session) -> Result<String, ApiError> {
    if session.auth_token.is_empty() {
        return Err(ApiError::Unauthenticated);
    }
    Ok(session.bearer())
}

// ========================
// Service
// ========================

/// The report endpoints as one seam; the app talks HTTP through [`HttpReports`]
#[allow(async_fn_in_trait)]
pub trait ReportService {
    async fn create_report(&self, session: &Session, body: &CreateReportRequest) -> Result<(), ApiError>;
    async fn list_reports(&self, session: &Session, window: ReportWindow) -> Result<ReportPage, ApiError>;
    async fn delete_report(&self, session: &Session, id: &str) -> Result<(), ApiError>;
}

/// Fetch-backed report service
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpReports;

impl ReportService for HttpReports {
    async fn create_report(&self, session: &Session, body: &CreateReportRequest) -> Result<(), ApiError> {
        create_report(session, body).await
    }

    async fn list_reports(&self, session: &Session, window: ReportWindow) -> Result<ReportPage, ApiError> {
        list_reports(session, window).await
    }

    async fn delete_report(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        delete_report(session, id).await
    }
}

// ========================
// Requests
// ========================

pub async fn create_report(session: &Session, body: &CreateReportRequest) -> Result<(), ApiError> {
    let bearer = require_token(session)?;
    let url = endpoint("/report/create", &[]);
    log::debug!("[API] POST {} ({} meals, {})", url, body.meals.len(), body.date);

    let response = Request::post(&url)
        .header("Authorization", &bearer)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_response::<IgnoredAny>(response).await.map(|_| ())
}

pub async fn list_reports(session: &Session, window: ReportWindow) -> Result<ReportPage, ApiError> {
    let bearer = require_token(session)?;
    let url = endpoint(
        "/report/all",
        &[("userId", session.user_id.as_str()), ("type", window.query_value())],
    );
    log::debug!("[API] GET {}", url);

    let response = Request::get(&url)
        .header("Authorization", &bearer)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_response::<ReportListResponse>(response).await.map(ReportListResponse::into_page)
}

pub async fn delete_report(session: &Session, id: &str) -> Result<(), ApiError> {
    let bearer = require_token(session)?;
    let url = endpoint("/report/delete", &[("id", id)]);
    log::debug!("[API] DELETE {}", url);

    let response = Request::delete(&url)
        .header("Authorization", &bearer)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_response::<IgnoredAny>(response).await.map(|_| ())
}
