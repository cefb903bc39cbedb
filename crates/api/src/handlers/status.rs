use crate::{
    dto::{HistoryEntryResponse, HistoryQuery, IpStatusResponse},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use blockscope_domain::DomainError;
use tracing::{debug, error, instrument};

/// Latest status of every recorded address, ordered by owner code.
#[instrument(skip(state), name = "api_get_ip_status")]
pub async fn get_ip_status(
    State(state): State<AppState>,
) -> Result<Json<Vec<IpStatusResponse>>, (StatusCode, String)> {
    match state.get_latest.execute().await {
        Ok(rows) => {
            debug!(count = rows.len(), "Latest status retrieved successfully");
            Ok(Json(
                rows.into_iter().map(IpStatusResponse::from_status).collect(),
            ))
        }
        Err(e) => {
            error!(error = %e, "Failed to retrieve latest status");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state), name = "api_get_address_history")]
pub async fn get_address_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntryResponse>>, (StatusCode, String)> {
    match state
        .get_history
        .execute(&query.owner, &query.address)
        .await
    {
        Ok(records) => {
            debug!(count = records.len(), "Address history retrieved successfully");
            Ok(Json(
                records
                    .into_iter()
                    .map(HistoryEntryResponse::from_record)
                    .collect(),
            ))
        }
        Err(e @ DomainError::InvalidIpAddress(_)) => Err((StatusCode::BAD_REQUEST, e.to_string())),
        Err(e) => {
            error!(error = %e, "Failed to retrieve address history");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
