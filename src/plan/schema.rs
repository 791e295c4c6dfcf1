//! Response schema descriptor sent to the provider
//!
//! Gemini's structured-output mode takes an OpenAPI-style schema in
//! `generationConfig.responseSchema` and constrains generation to it. The
//! descriptor is fixed - it never varies with form input - and the field
//! descriptions double as steering text for the model.

use serde_json::{Value, json};

/// Build the study-plan response schema
///
/// Enumerates every field of [`super::StudyPlan`] with its expected kind and
/// a human-readable description the provider uses to steer generation.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "roast": {
                "type": "STRING",
                "description": "A short, funny, slightly roast-y comment about the user's situation.",
            },
            "motivationalQuote": {
                "type": "STRING",
                "description": "A funny or weirdly specific motivational quote for a CS student.",
            },
            "weeklySchedule": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "STRING" },
                        "theme": { "type": "STRING", "description": "A funny theme title for the day" },
                        "tasks": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "time": { "type": "STRING" },
                                    "activity": { "type": "STRING" },
                                    "description": { "type": "STRING" },
                                },
                            },
                        },
                    },
                },
            },
            "resources": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "type": { "type": "STRING" },
                        "description": { "type": "STRING" },
                    },
                },
            },
            "careerAdvice": {
                "type": "STRING",
                "description": "Actionable, slightly unconventional career advice.",
            },
        },
        "required": ["roast", "weeklySchedule", "resources", "careerAdvice", "motivationalQuote"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_required_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(
            required,
            ["roast", "weeklySchedule", "resources", "careerAdvice", "motivationalQuote"]
        );
    }

    #[test]
    fn test_schema_is_fixed() {
        // The descriptor never varies - two builds are identical
        assert_eq!(response_schema(), response_schema());
    }

    #[test]
    fn test_schema_field_kinds() {
        let schema = response_schema();

        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["roast"]["type"], "STRING");
        assert_eq!(schema["properties"]["weeklySchedule"]["type"], "ARRAY");
        assert_eq!(
            schema["properties"]["weeklySchedule"]["items"]["properties"]["tasks"]["type"],
            "ARRAY"
        );
        assert_eq!(schema["properties"]["resources"]["items"]["properties"]["type"]["type"], "STRING");
    }
}
