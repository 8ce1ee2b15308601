//! Props schema files: a flat JSON object of prop name -> type name.

use std::path::Path;

use serde_json::{Map, Value};
use webcc_adapters::PropSchema;

use crate::compiler::{CompileError, PlaceholderData};

/// Read and parse a props schema file.
pub async fn load_props(path: &Path) -> Result<PropSchema, CompileError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CompileError::PropsRead {
            path: path.to_path_buf(),
            source,
        })?;

    parse_props(path, &content)
}

/// Parse props schema JSON. Key order is preserved.
pub fn parse_props(path: &Path, content: &str) -> Result<PropSchema, CompileError> {
    let parse_error = |message: String| CompileError::PropsParse {
        path: path.to_path_buf(),
        message,
    };

    let object: Map<String, Value> =
        serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    let mut schema = PropSchema::new();
    for (name, value) in object {
        match value {
            Value::String(type_name) => schema.push(name, type_name),
            other => {
                return Err(parse_error(format!(
                    "prop '{}' must map to a type name string, found {}",
                    name, other
                )))
            }
        }
    }

    Ok(schema)
}

/// Build placeholder data for the template compiler from declared props.
pub fn placeholders(schema: &PropSchema, placeholder: impl Fn(&str) -> String) -> PlaceholderData {
    schema
        .names()
        .map(|name| (name.to_string(), placeholder(name)))
        .collect()
}
