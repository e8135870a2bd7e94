use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::api_url;
use contracts::projections::p900_production_suggestion::dto::ProductionSuggestion;

/// `GET /production`: what can be produced with the current stock
pub async fn fetch_suggestions() -> Result<Vec<ProductionSuggestion>, ApiError> {
    api_client::get_json(&api_url("/production")).await
}
