use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ModelsLabGenerateResponse {
    pub output: Option<Vec<Value>>,
    pub error: Option<Value>,
}

impl ModelsLabGenerateResponse {
    pub fn first_output(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.first())
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.error {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::String(message)) if message.is_empty() => None,
            Some(Value::String(message)) => Some(message.to_string()),
            Some(value) => Some(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> ModelsLabGenerateResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn first_output_ignores_the_rest() {
        let response = parse(json!({ "status": "success", "output": ["url1", "url2"] }));

        assert_eq!(response.first_output(), Some("url1"));
    }

    #[test]
    fn first_output_is_none_for_empty_or_missing_output() {
        assert_eq!(parse(json!({ "output": [] })).first_output(), None);
        assert_eq!(parse(json!({ "output": null })).first_output(), None);
        assert_eq!(parse(json!({ "status": "error" })).first_output(), None);
        assert_eq!(parse(json!({ "output": [""] })).first_output(), None);
    }

    #[test]
    fn error_message_reads_strings_and_renders_other_values() {
        assert_eq!(
            parse(json!({ "error": "Invalid API key" })).error_message(),
            Some("Invalid API key".to_string())
        );
        assert_eq!(
            parse(json!({ "error": { "code": 42 } })).error_message(),
            Some(r#"{"code":42}"#.to_string())
        );
        assert_eq!(parse(json!({ "error": "" })).error_message(), None);
        assert_eq!(parse(json!({ "error": null })).error_message(), None);
        assert_eq!(parse(json!({})).error_message(), None);
    }

    #[test]
    fn non_string_outputs_do_not_fail_parsing() {
        assert_eq!(
            parse(json!({ "output": ["url1", null] })).first_output(),
            Some("url1")
        );
        assert_eq!(parse(json!({ "output": [null, "url2"] })).first_output(), None);
        assert_eq!(parse(json!({ "output": [1] })).first_output(), None);
    }
}
