use crate::{dto::OwnerSummaryResponse, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, error, instrument};

#[instrument(skip(state), name = "api_get_owners")]
pub async fn get_owners(
    State(state): State<AppState>,
) -> Result<Json<Vec<OwnerSummaryResponse>>, (StatusCode, String)> {
    match state.get_owner_summaries.execute().await {
        Ok(summaries) => {
            debug!(count = summaries.len(), "Owner summaries retrieved successfully");
            Ok(Json(
                summaries
                    .into_iter()
                    .map(OwnerSummaryResponse::from_summary)
                    .collect(),
            ))
        }
        Err(e) => {
            error!(error = %e, "Failed to retrieve owner summaries");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
