use validator::Validate;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::modelslab, dtos::generate_media_dto::GenerateMediaDto, errors::MediaApiError,
    models::generate_media_response::GenerateMediaResponse,
};

pub async fn generate_media(
    dto: &GenerateMediaDto,
    state: &AppState,
) -> Result<GenerateMediaResponse, ApiError> {
    if let Err(e) = dto.validate() {
        tracing::error!(%e);
        return Err(MediaApiError::MissingPrompt.value());
    }
    let prompt = dto.prompt.as_deref().unwrap_or_default();

    match modelslab::service::modelslab_generate_image(
        prompt,
        dto.init_image(),
        &state.envy,
        &state.client,
    )
    .await
    {
        Ok(image_url) => Ok(GenerateMediaResponse {
            success: true,
            image_url,
        }),
        Err(e) => {
            tracing::error!("generate_media failed: {}", e.message);
            Err(e)
        }
    }
}
