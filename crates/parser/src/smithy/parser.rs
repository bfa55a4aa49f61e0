//! Smithy model file loader

use super::types::SmithyModel;
use smithy_extract_common::{ExtractError, Result};
use std::fs;
use std::path::Path;

/// Smithy specification loader
///
/// Reads and parses Smithy JSON AST files. Loading is the only fallible
/// step of an extraction run.
pub struct SmithyParser {
    /// Loaded Smithy model
    model: SmithyModel,
}

impl SmithyParser {
    /// Load Smithy model from file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = SmithyParser::from_file("model/dynamo.json.bak")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ExtractError::Parse(format!(
                "Failed to read Smithy file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse Smithy model from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let model: SmithyModel = serde_json::from_str(json)
            .map_err(|e| ExtractError::Parse(format!("Failed to parse Smithy JSON: {}", e)))?;

        tracing::debug!(
            smithy = %model.smithy,
            shapes = model.shapes.len(),
            "loaded Smithy model"
        );

        Ok(Self { model })
    }

    /// Get reference to the underlying Smithy model
    pub fn model(&self) -> &SmithyModel {
        &self.model
    }

    /// Take ownership of the underlying Smithy model
    pub fn into_model(self) -> SmithyModel {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_smithy() {
        let smithy_json = r#"{
            "smithy": "2.0",
            "shapes": {
                "com.example#MyService": {
                    "type": "service",
                    "version": "1.0.0",
                    "operations": []
                }
            }
        }"#;

        let parser = SmithyParser::from_json(smithy_json);
        assert!(parser.is_ok());

        let parser = parser.unwrap();
        assert_eq!(parser.model.smithy, "2.0");
        assert_eq!(parser.model.shapes.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = SmithyParser::from_json(r#"{ "shapes": { "#);
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let result = SmithyParser::from_file("/nonexistent/dynamo.json");
        match result {
            Err(ExtractError::Parse(msg)) => assert!(msg.contains("/nonexistent/dynamo.json")),
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }
}
