//! Response-shape contracts for structured Gemini output.
//!
//! A `Schema` is sent to the model as `generationConfig.responseSchema` and
//! then enforced locally on the returned JSON. The remote service is not
//! trusted to honour it.

use serde_json::{json, Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String,
    Number,
    Array(Box<Schema>),
    /// Properties in declaration order. Every property listed is required.
    Object(Vec<(&'static str, Schema)>),
}

#[derive(Debug, Error, PartialEq)]
#[error("{path}: expected {expected}, found {found}")]
pub struct SchemaViolation {
    pub path: String,
    pub expected: &'static str,
    pub found: String,
}

impl Schema {
    pub fn object(properties: Vec<(&'static str, Schema)>) -> Self {
        Schema::Object(properties)
    }

    pub fn array_of(items: Schema) -> Self {
        Schema::Array(Box::new(items))
    }

    /// Renders the schema in the OpenAPI subset Gemini accepts.
    pub fn to_gemini(&self) -> Value {
        match self {
            Schema::String => json!({ "type": "STRING" }),
            Schema::Number => json!({ "type": "NUMBER" }),
            Schema::Array(items) => json!({ "type": "ARRAY", "items": items.to_gemini() }),
            Schema::Object(props) => {
                let mut properties = Map::new();
                for (name, schema) in props {
                    properties.insert((*name).to_string(), schema.to_gemini());
                }
                let required: Vec<&str> = props.iter().map(|(name, _)| *name).collect();
                json!({
                    "type": "OBJECT",
                    "properties": properties,
                    "required": required,
                })
            }
        }
    }

    /// Checks that `value` has this shape. Extra object keys are ignored.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.validate_at("$", value)
    }

    fn validate_at(&self, path: &str, value: &Value) -> Result<(), SchemaViolation> {
        match (self, value) {
            (Schema::String, Value::String(_)) => Ok(()),
            (Schema::Number, Value::Number(_)) => Ok(()),
            (Schema::Array(items), Value::Array(values)) => {
                for (idx, item) in values.iter().enumerate() {
                    items.validate_at(&format!("{path}[{idx}]"), item)?;
                }
                Ok(())
            }
            (Schema::Object(props), Value::Object(map)) => {
                for (name, schema) in props {
                    let field_path = format!("{path}.{name}");
                    match map.get(*name) {
                        Some(field) => schema.validate_at(&field_path, field)?,
                        None => {
                            return Err(SchemaViolation {
                                path: field_path,
                                expected: schema.kind(),
                                found: "nothing".to_string(),
                            })
                        }
                    }
                }
                Ok(())
            }
            (schema, other) => Err(SchemaViolation {
                path: path.to_string(),
                expected: schema.kind(),
                found: json_kind(other).to_string(),
            }),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Schema::String => "string",
            Schema::Number => "number",
            Schema::Array(_) => "array",
            Schema::Object(_) => "object",
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> Schema {
        Schema::object(vec![("label", Schema::String), ("x", Schema::Number)])
    }

    #[test]
    fn test_to_gemini_lists_required_in_order() {
        let rendered = point().to_gemini();
        assert_eq!(rendered["type"], "OBJECT");
        assert_eq!(rendered["properties"]["x"]["type"], "NUMBER");
        assert_eq!(rendered["required"], json!(["label", "x"]));
    }

    #[test]
    fn test_to_gemini_array() {
        let rendered = Schema::array_of(Schema::String).to_gemini();
        assert_eq!(rendered, json!({"type": "ARRAY", "items": {"type": "STRING"}}));
    }

    #[test]
    fn test_validate_accepts_extra_keys() {
        let value = json!({"label": "a", "x": 1.5, "extra": true});
        assert!(point().validate(&value).is_ok());
    }

    #[test]
    fn test_validate_reports_missing_field_path() {
        let err = point().validate(&json!({"label": "a"})).unwrap_err();
        assert_eq!(err.path, "$.x");
        assert_eq!(err.found, "nothing");
    }

    #[test]
    fn test_validate_reports_nested_type_mismatch() {
        let schema = Schema::object(vec![("points", Schema::array_of(point()))]);
        let value = json!({"points": [{"label": "a", "x": 1}, {"label": 3, "x": 2}]});
        let err = schema.validate(&value).unwrap_err();
        assert_eq!(err.path, "$.points[1].label");
        assert_eq!(err.expected, "string");
        assert_eq!(err.found, "number");
    }

    #[test]
    fn test_validate_rejects_null_for_string() {
        let err = Schema::String.validate(&Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "$: expected string, found null");
    }
}
