use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    dtos::generate_media_dto::GenerateMediaDto,
    models::generate_media_response::GenerateMediaResponse, service,
};

pub async fn generate_media(
    State(state): State<AppState>,
    payload: Result<Json<GenerateMediaDto>, JsonRejection>,
) -> Result<Json<GenerateMediaResponse>, ApiError> {
    let dto = match payload {
        Ok(Json(dto)) => dto,
        // a body that isn't declared as json carries no prompt
        Err(JsonRejection::MissingJsonContentType(_)) => GenerateMediaDto::default(),
        Err(e) => return Err(e.into()),
    };

    match service::generate_media(&dto, &state).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}
