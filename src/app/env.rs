use serde::Deserialize;

use crate::media::apis::modelslab::config;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub modelslab_api_key: String,
    #[serde(default = "default_modelslab_api_url")]
    pub modelslab_api_url: String,
    #[serde(default = "default_modelslab_model_id")]
    pub modelslab_model_id: String,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_modelslab_api_url() -> String {
    config::API_URL.to_string()
}

fn default_modelslab_model_id() -> String {
    config::MODEL_ID.to_string()
}

#[cfg(test)]
impl Envy {
    pub fn with_modelslab_api_url(api_url: &str) -> Self {
        Envy {
            app_env: "test".to_string(),
            port: None,
            modelslab_api_key: "test-key".to_string(),
            modelslab_api_url: api_url.to_string(),
            modelslab_model_id: config::MODEL_ID.to_string(),
        }
    }
}
