use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub prompt: String,
    pub model_id: String,
    pub key: String,
    // serialized as null when absent
    pub init_image: Option<String>,
}
