use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    response::Json as AxumJson,
};
use uuid::Uuid;

use crate::db::models::{PointsResponse, ProcessResponse, Receipt};
use crate::error::ApiError;
use crate::points::compute_points;
use crate::AppState;

/// `POST /receipts/process`
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<AxumJson<ProcessResponse>, ApiError> {
    let Json(receipt) = payload?;

    let id = Uuid::new_v4().to_string();
    let points = compute_points(&receipt)?;

    state.store.put(id.clone(), points).await;
    tracing::info!(%id, points, retailer = %receipt.retailer, "receipt processed");

    Ok(AxumJson(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<AxumJson<PointsResponse>, ApiError> {
    match state.store.get(&id).await {
        Some(total) => Ok(AxumJson(PointsResponse { total })),
        None => {
            tracing::debug!(%id, "unknown receipt id");
            Err(ApiError::ReceiptNotFound)
        }
    }
}
