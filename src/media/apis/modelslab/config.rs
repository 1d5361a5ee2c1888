pub static API_URL: &str = "https://modelslab.com/api/v1/images/image-to-image";
pub static MODEL_ID: &str = "seededit-i2i";
