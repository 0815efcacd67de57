use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::session::{reduce, Transition, WizardAction, WizardSession};
use crate::config::PaymentConfig;
use crate::error::AppError;
use crate::workflows::fees::{FeeRequest, FeeState};
use crate::workflows::inspection::{missing_requirements, InspectionRecord, Requirement};
use crate::workflows::payment::PaymentHandoff;
use crate::workflows::receipt::{export_receipt, ReceiptContext, TextReceiptRenderer};

#[derive(Debug, Default, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    #[serde(default)]
    pub session: WizardSession,
    pub action: WizardAction,
}

#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    #[serde(default)]
    pub record: InspectionRecord,
    #[serde(default)]
    pub issued_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct RequirementView {
    pub requirement: Requirement,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ValidationView {
    pub complete: bool,
    pub missing: Vec<RequirementView>,
}

#[derive(Debug, Serialize)]
pub struct ReceiptView {
    pub file_name: String,
    pub media_type: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct HandoffRequest {
    #[serde(default)]
    pub fees: FeeState,
}

/// Stateless endpoints: clients hold the session and send it back with each
/// action.
pub fn wizard_router(payment: PaymentConfig) -> Router {
    Router::new()
        .route("/api/v1/wizard/start", post(start_handler))
        .route("/api/v1/wizard/dispatch", post(dispatch_handler))
        .route("/api/v1/inspection/validate", post(validate_handler))
        .route("/api/v1/inspection/receipt", post(receipt_handler))
        .route("/api/v1/fees/recompute", post(recompute_handler))
        .route("/api/v1/payment/handoff", post(handoff_handler))
        .with_state(Arc::new(payment))
}

pub(crate) async fn start_handler(Json(request): Json<StartRequest>) -> Json<WizardSession> {
    let session = match request.url.as_deref() {
        Some(url) => WizardSession::seeded(url),
        None => WizardSession::default(),
    };
    Json(session)
}

pub(crate) async fn dispatch_handler(Json(request): Json<DispatchRequest>) -> Json<Transition> {
    Json(reduce(&request.session, request.action))
}

pub(crate) async fn validate_handler(Json(request): Json<RecordRequest>) -> Json<ValidationView> {
    let missing: Vec<RequirementView> = missing_requirements(&request.record)
        .into_iter()
        .map(|requirement| RequirementView {
            requirement,
            label: requirement.label(),
        })
        .collect();

    Json(ValidationView {
        complete: missing.is_empty(),
        missing,
    })
}

pub(crate) async fn receipt_handler(
    Json(request): Json<RecordRequest>,
) -> Result<Json<ReceiptView>, AppError> {
    let context = ReceiptContext {
        issued_on: request
            .issued_on
            .unwrap_or_else(|| Local::now().date_naive()),
    };
    let artifact = export_receipt(&request.record, &TextReceiptRenderer, &context)?;

    Ok(Json(ReceiptView {
        file_name: artifact.file_name,
        media_type: artifact.media_type.to_string(),
        content: String::from_utf8_lossy(&artifact.bytes).into_owned(),
    }))
}

pub(crate) async fn recompute_handler(Json(request): Json<FeeRequest>) -> Json<FeeState> {
    Json(FeeState::from(request))
}

pub(crate) async fn handoff_handler(
    State(payment): State<Arc<PaymentConfig>>,
    Json(request): Json<HandoffRequest>,
) -> Json<PaymentHandoff> {
    Json(PaymentHandoff::new(&request.fees, &payment))
}
