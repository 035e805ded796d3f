use serde_json::{json, Value};

/// JSON Schema every school directory file must satisfy
pub fn directory_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "School Directory",
        "type": "object",
        "required": ["schools"],
        "properties": {
            "schools": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "name"],
                    "properties": {
                        "id": {"type": "string"},
                        "name": {"type": "string"},
                        "country": {"type": ["string", "null"]},
                        "yearFounded": {"type": ["integer", "null"]},
                        "city": {"type": ["string", "null"]},
                        "state": {"type": ["string", "null"]},
                        "logo": {"type": ["string", "null"]}
                    }
                }
            }
        }
    })
}

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with every validation error otherwise
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a parsed directory document against [`directory_schema`]
pub fn validate_directory_json(data: &Value) -> Result<(), Vec<String>> {
    validate_against_schema(&directory_schema(), data)
}
