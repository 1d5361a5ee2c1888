use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMediaResponse {
    pub success: bool,
    pub image_url: String,
}
