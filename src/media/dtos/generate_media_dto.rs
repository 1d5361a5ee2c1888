use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateMediaDto {
    #[validate(
        required(message = "Missing prompt"),
        length(min = 1, message = "Missing prompt")
    )]
    pub prompt: Option<String>,
    /// Base64 source image, passed through untouched.
    pub image: Option<String>,
}

impl GenerateMediaDto {
    /// The image to send upstream. An empty string counts as no image.
    pub fn init_image(&self) -> Option<String> {
        self.image.clone().filter(|image| !image.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dto(value: serde_json::Value) -> GenerateMediaDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn prompt_is_required_and_non_empty() {
        assert!(dto(json!({})).validate().is_err());
        assert!(dto(json!({ "prompt": null })).validate().is_err());
        assert!(dto(json!({ "prompt": "" })).validate().is_err());
        assert!(dto(json!({ "prompt": "make it blue" })).validate().is_ok());
    }

    #[test]
    fn image_is_optional() {
        let dto = dto(json!({ "prompt": "make it blue", "image": "aGVsbG8=" }));

        assert!(dto.validate().is_ok());
        assert_eq!(dto.init_image(), Some("aGVsbG8=".to_string()));
    }

    #[test]
    fn empty_image_is_treated_as_absent() {
        assert_eq!(dto(json!({ "prompt": "p", "image": "" })).init_image(), None);
        assert_eq!(dto(json!({ "prompt": "p" })).init_image(), None);
    }
}
