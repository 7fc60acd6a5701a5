use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::{ConnectInfo, Path, Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use dentlead_core::country;
use dentlead_core::locale::FALLBACK_THANK_YOU;
use dentlead_core::phone::{self, PhoneErrorKind};
use dentlead_ports::inbound::{IntakeOutcome, IntakeRejection, LeadIntake};
use dentlead_ports::outbound::Translator;
use dentlead_ports::types::ContactSubmission;

const UNKNOWN_DIAL_CODE_KEY: &str = "contactForm.unknownDialCode";

#[derive(Clone)]
pub struct AppState {
    pub intake: Arc<dyn LeadIntake>,
    pub translator: Arc<dyn Translator>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/countries", get(countries))
        .route("/api/phone/validate", get(validate_phone))
        .route("/:slug/initial-dial-code", get(initial_dial_code))
        .route("/:slug/contact", post(submit_contact))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
struct CountryView {
    iso_code: &'static str,
    dial_code: &'static str,
    flag: Option<String>,
}

async fn countries() -> Json<Vec<CountryView>> {
    Json(
        country::all()
            .iter()
            .map(|c| CountryView {
                iso_code: c.iso_code,
                dial_code: c.dial_code,
                flag: c.flag(),
            })
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
struct ValidateQuery {
    dial_code: String,
    #[serde(default)]
    number: String,
}

#[derive(Debug, Serialize)]
struct ValidateResponse {
    valid: bool,
    error_kind: PhoneErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_key: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    max_digits: usize,
}

async fn validate_phone(
    State(state): State<AppState>,
    Query(query): Query<ValidateQuery>,
) -> Json<ValidateResponse> {
    let verdict = phone::validate(&query.dial_code, &query.number);
    let error_key = (!verdict.valid).then(|| verdict.error_kind.translation_key());
    Json(ValidateResponse {
        valid: verdict.valid,
        error_kind: verdict.error_kind,
        error_key,
        message: error_key.map(|key| state.translator.t(key)),
        max_digits: phone::max_digits_for(&query.dial_code),
    })
}

async fn initial_dial_code(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> impl IntoResponse {
    let client_ip = client_ip(&headers, connect_info);
    Json(
        state
            .intake
            .initial_dial_code(&format!("/{slug}"), client_ip)
            .await,
    )
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error_key: &'static str,
    message: String,
}

async fn submit_contact(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Json(form): Json<ContactSubmission>,
) -> Response {
    let client_ip = client_ip(&headers, connect_info);
    let page_path = format!("/{slug}");

    let (status, error_key) = match state.intake.submit(&page_path, client_ip, form).await {
        IntakeOutcome::Accepted(receipt) => return see_other(&receipt.redirect),
        IntakeOutcome::Rejected(IntakeRejection::Invalid { error_key }) => {
            (StatusCode::UNPROCESSABLE_ENTITY, error_key)
        }
        IntakeOutcome::Rejected(IntakeRejection::UnknownDialCode(code)) => {
            tracing::debug!(dial_code = %code, "contact form with unlisted dial code");
            (StatusCode::UNPROCESSABLE_ENTITY, UNKNOWN_DIAL_CODE_KEY)
        }
        IntakeOutcome::Failed { error_key } => (StatusCode::BAD_GATEWAY, error_key),
    };

    let body = ErrorBody {
        error_key,
        message: state.translator.t(error_key),
    };
    (status, Json(body)).into_response()
}

/// The lead is already with the CRM here, so an unusable location falls back
/// to the default thank-you page instead of failing the request.
fn see_other(location: &str) -> Response {
    let location = HeaderValue::try_from(location).unwrap_or_else(|_| {
        tracing::warn!(location = ?location, "redirect is not a valid header value");
        HeaderValue::from_static(FALLBACK_THANK_YOU)
    });
    (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response()
}

/// First `X-Forwarded-For` hop when present, else the socket peer.
fn client_ip(headers: &HeaderMap, connect_info: Option<ConnectInfo<SocketAddr>>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|first| first.trim().parse().ok())
        .or_else(|| connect_info.map(|ConnectInfo(addr)| addr.ip()))
}
