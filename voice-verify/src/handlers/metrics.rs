use crate::error::AppError;
use crate::AppState;
use axum::extract::State;

pub async fn metrics(State(state): State<AppState>) -> Result<String, AppError> {
    Ok(state.metrics.render()?)
}
