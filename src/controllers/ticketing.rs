use axum::{
    extract::State,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::error::ServiceError;
use crate::middleware::AuthToken;
use crate::models::{Receipt, SeatId, Ticket, User};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ticketing/purchase", post(purchase_ticket))
        .route("/ticketing/receipt", post(view_receipt))
        .route("/ticketing/admin", post(view_admin_details))
        .route("/ticketing/removeUser", post(remove_user))
        .route("/ticketing/modifySeat", post(modify_seat))
}

/* ---------- PURCHASE / RECEIPT ---------- */

// POST /api/ticketing/purchase
#[derive(Debug, Deserialize)]
struct PurchaseTicketRequest {
    ticket: Ticket,
}

#[derive(Debug, Serialize)]
struct ReceiptResponse {
    receipt: Receipt,
}

async fn purchase_ticket(
    State(state): State<Arc<AppState>>,
    _auth: AuthToken,
    Json(req): Json<PurchaseTicketRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let receipt = state.ticketing.purchase_ticket(req.ticket).await?;
    Ok(Json(ReceiptResponse { receipt }))
}

// POST /api/ticketing/receipt
#[derive(Debug, Deserialize)]
struct ViewReceiptRequest {
    ticket: Ticket,
}

async fn view_receipt(
    State(state): State<Arc<AppState>>,
    _auth: AuthToken,
    Json(req): Json<ViewReceiptRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let receipt = state.ticketing.view_receipt(req.ticket).await?;
    Ok(Json(ReceiptResponse { receipt }))
}

/* ---------- ADMIN ---------- */

// POST /api/ticketing/admin
#[derive(Debug, Default, Deserialize)]
struct ViewAdminDetailsRequest {
    // Accepted for wire compatibility, never applied as a filter.
    #[serde(default)]
    section: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct SeatView {
    #[serde(rename = "seatNumber")]
    seat_number: SeatId,
    user: User,
}

#[derive(Debug, Serialize)]
struct AdminViewResponse {
    users: Vec<User>,
    seats: Vec<SeatView>,
}

async fn view_admin_details(
    State(state): State<Arc<AppState>>,
    _auth: AuthToken,
    Json(req): Json<ViewAdminDetailsRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let _ = req.section;

    let view = state.ticketing.view_admin_details().await;
    let seats = view
        .seats
        .into_iter()
        .map(|(seat_number, user)| SeatView { seat_number, user })
        .collect();
    Ok(Json(AdminViewResponse {
        users: view.users,
        seats,
    }))
}

/* ---------- USER MANAGEMENT ---------- */

// POST /api/ticketing/removeUser
#[derive(Debug, Deserialize)]
struct RemoveUserRequest {
    user: User,
}

async fn remove_user(
    State(state): State<Arc<AppState>>,
    _auth: AuthToken,
    Json(req): Json<RemoveUserRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    state.ticketing.remove_user(&req.user).await.map_err(|e| {
        tracing::warn!(first_name = %req.user.first_name, "remove_user failed: {e}");
        e
    })?;
    Ok(Json(json!({})))
}

// POST /api/ticketing/modifySeat
#[derive(Debug, Deserialize)]
struct ModifySeatRequest {
    user: User,
}

async fn modify_seat(
    State(state): State<Arc<AppState>>,
    _auth: AuthToken,
    Json(req): Json<ModifySeatRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    state.ticketing.modify_seat(req.user).await?;
    Ok(Json(json!({})))
}
