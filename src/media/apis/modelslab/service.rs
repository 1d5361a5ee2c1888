use reqwest::{Client, Response, StatusCode};

use crate::{
    app::{env::Envy, models::api_error::ApiError},
    media::errors::MediaApiError,
};

use super::{
    models::input_spec::InputSpec,
    structs::modelslab_generate_response::ModelsLabGenerateResponse,
};

/// Sends one image-to-image request and returns the first output url.
pub async fn modelslab_generate_image(
    prompt: &str,
    init_image: Option<String>,
    envy: &Envy,
    client: &Client,
) -> Result<String, ApiError> {
    let input_spec = provide_input_spec(prompt, init_image, envy);

    let result = client
        .post(&envy.modelslab_api_url)
        .json(&input_spec)
        .send()
        .await;

    match result {
        Ok(res) => {
            let status = res.status();

            match parse_response_to_modelslab_generate_response(res).await {
                Ok(response) => extract_image_url(status, &response),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(MediaApiError::UpstreamUnreachable(e.to_string()).value()),
    }
}

fn provide_input_spec(prompt: &str, init_image: Option<String>, envy: &Envy) -> InputSpec {
    InputSpec {
        prompt: prompt.to_string(),
        model_id: envy.modelslab_model_id.to_string(),
        key: envy.modelslab_api_key.to_string(),
        init_image,
    }
}

async fn parse_response_to_modelslab_generate_response(
    res: Response,
) -> Result<ModelsLabGenerateResponse, ApiError> {
    match res.text().await {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(modelslab_generate_response) => Ok(modelslab_generate_response),
            Err(e) => Err(MediaApiError::UpstreamUnreachable(e.to_string()).value()),
        },
        Err(e) => Err(MediaApiError::UpstreamUnreachable(e.to_string()).value()),
    }
}

fn extract_image_url(
    status: StatusCode,
    response: &ModelsLabGenerateResponse,
) -> Result<String, ApiError> {
    match response.first_output() {
        Some(image_url) if status.is_success() => Ok(image_url.to_string()),
        _ => Err(MediaApiError::UpstreamRejected(response.error_message()).value()),
    }
}
