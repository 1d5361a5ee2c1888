use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

pub static NO_IMAGE_MESSAGE: &str = "ModelsLab returned no image.";

#[derive(Debug)]
pub enum MediaApiError {
    MissingPrompt,
    UpstreamUnreachable(String),
    UpstreamRejected(Option<String>),
}

impl MediaApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::MissingPrompt => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Missing prompt".to_string(),
            },
            Self::UpstreamUnreachable(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.to_string(),
            },
            Self::UpstreamRejected(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message
                    .clone()
                    .unwrap_or_else(|| NO_IMAGE_MESSAGE.to_string()),
            },
        }
    }
}
