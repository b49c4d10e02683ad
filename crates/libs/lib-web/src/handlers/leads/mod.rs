//! # Lead Handlers
//!
//! Lead capture and listing.

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use lib_core::{
    dto::LeadRequest,
    model::store::{Lead, LeadForCreate, LeadRepository},
    AppError, DbPool,
};
use lib_utils::{validate_email, validate_not_empty};
use tracing::{info, instrument, warn};

/// List all leads, oldest first.
#[instrument(skip_all)]
pub async fn list_leads(State(pool): State<DbPool>) -> Result<Json<Vec<Lead>>, AppError> {
    let leads = LeadRepository::list(&pool).await?;
    info!("[LEADS] Listed {} lead(s)", leads.len());
    Ok(Json(leads))
}

/// Create a lead from a form submission.
///
/// # Validation
///
/// - `name` must not be empty
/// - `email` must be a valid address
/// - blank `phone` / `notes` are stored as `NULL`
#[instrument(skip_all, fields(email = %req.email))]
pub async fn create_lead(
    State(pool): State<DbPool>,
    Json(req): Json<LeadRequest>,
) -> Result<(StatusCode, Json<Lead>), AppError> {
    let lead = validate_lead(req).map_err(|e| {
        warn!("[LEADS] Rejected lead: {}", e);
        AppError::InvalidInput(e)
    })?;

    let lead = LeadRepository::create(&pool, &lead).await?;
    info!("[LEADS] Lead created (id: {})", lead.id);

    Ok((StatusCode::CREATED, Json(lead)))
}

fn validate_lead(req: LeadRequest) -> Result<LeadForCreate, String> {
    validate_not_empty(&req.name, "Name")?;
    validate_email(&req.email)?;

    let non_blank = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    Ok(LeadForCreate {
        name: req.name.trim().to_string(),
        email: req.email.trim().to_string(),
        phone: non_blank(req.phone),
        notes: non_blank(req.notes),
    })
}
