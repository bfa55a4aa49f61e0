//! Extraction configuration
//!
//! The root operations, the owning service, and the notation constants used
//! by the emitter. `ExtractionConfig::default()` describes the DynamoDB
//! GetItem/PutItem/CreateTable extraction; a YAML file can override any key.

use crate::{namespace_of, ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DYNAMODB_NAMESPACE: &str = "com.amazonaws.dynamodb";

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Value of the `$version` control statement (e.g., "2")
    pub smithy_version: String,
    /// Namespace declared in the rendered IDL
    pub namespace: String,
    /// Fully qualified ID of the owning service shape
    pub service: String,
    /// Fully qualified IDs of the root operations, in listing order
    pub operations: Vec<String>,
    /// Protocol trait applied to the service (rendered as `@<protocol>`)
    pub protocol: String,
    /// SDK identifier for the `@service` trait
    pub sdk_id: String,
    /// Shape IDs rendered as `use` statements
    pub imports: Vec<String>,
    /// Error name every operation error list must contain
    pub required_error: String,
    /// Render `smithy.api#documentation` traits as `///` comments
    pub include_docs: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            smithy_version: "2".to_string(),
            namespace: DYNAMODB_NAMESPACE.to_string(),
            service: format!("{}#DynamoDB_20120810", DYNAMODB_NAMESPACE),
            operations: ["GetItem", "PutItem", "CreateTable"]
                .iter()
                .map(|op| format!("{}#{}", DYNAMODB_NAMESPACE, op))
                .collect(),
            protocol: "awsJson1_0".to_string(),
            sdk_id: "DynamoDB".to_string(),
            imports: vec![
                "aws.protocols#awsJson1_0".to_string(),
                "aws.api#service".to_string(),
                "smithy.framework#ValidationException".to_string(),
            ],
            required_error: "ValidationException".to_string(),
            include_docs: false,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExtractError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            ExtractError::Config(msg) => ExtractError::Config(format!("{:?}: {}", path, msg)),
            other => other,
        })
    }

    /// Parse configuration from a YAML string and validate it
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that identifiers are fully qualified and the root set is usable
    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(ExtractError::Config("namespace must not be empty".to_string()));
        }

        if self.operations.is_empty() {
            return Err(ExtractError::Config(
                "at least one root operation is required".to_string(),
            ));
        }

        for shape_id in std::iter::once(&self.service).chain(&self.operations) {
            if namespace_of(shape_id).is_none() {
                return Err(ExtractError::Config(format!(
                    "shape ID '{}' is not of the form namespace#Name",
                    shape_id
                )));
            }
        }

        Ok(())
    }

    /// Resolver seeds: the root operations followed by the service
    pub fn roots(&self) -> Vec<String> {
        let mut roots = self.operations.clone();
        roots.push(self.service.clone());
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ExtractionConfig::default();
        assert_eq!(config.smithy_version, "2");
        assert_eq!(config.service, "com.amazonaws.dynamodb#DynamoDB_20120810");
        assert_eq!(
            config.operations,
            vec![
                "com.amazonaws.dynamodb#GetItem",
                "com.amazonaws.dynamodb#PutItem",
                "com.amazonaws.dynamodb#CreateTable",
            ]
        );
        assert_eq!(config.imports.len(), 3);
        assert!(!config.include_docs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_roots_end_with_service() {
        let config = ExtractionConfig::default();
        let roots = config.roots();
        assert_eq!(roots.len(), 4);
        assert_eq!(roots[0], "com.amazonaws.dynamodb#GetItem");
        assert_eq!(roots[3], "com.amazonaws.dynamodb#DynamoDB_20120810");
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = r#"
namespace: com.example.storage
service: "com.example.storage#Storage"
operations:
  - "com.example.storage#GetBucket"
include_docs: true
"#;
        let config = ExtractionConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.namespace, "com.example.storage");
        assert_eq!(config.operations, vec!["com.example.storage#GetBucket"]);
        assert!(config.include_docs);
        assert_eq!(config.smithy_version, "2");
        assert_eq!(config.required_error, "ValidationException");
    }

    #[test]
    fn test_rejects_unqualified_operation() {
        let yaml = r#"
operations:
  - GetItem
"#;
        let err = ExtractionConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ExtractError::Config(_)));
        assert!(err.to_string().contains("GetItem"));
    }

    #[test]
    fn test_rejects_empty_operations() {
        let err = ExtractionConfig::from_yaml_str("operations: []").unwrap_err();
        assert!(err.to_string().contains("at least one root operation"));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = ExtractionConfig::from_yaml_str("operations: [unclosed").unwrap_err();
        assert!(matches!(err, ExtractError::Yaml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sdk_id: Storage").unwrap();

        let config = ExtractionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.sdk_id, "Storage");
        assert_eq!(config.protocol, "awsJson1_0");
    }

    #[test]
    fn test_bundled_dynamodb_config_matches_default() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/dynamodb.yaml");
        let config = ExtractionConfig::from_file(&path).unwrap();
        assert_eq!(config, ExtractionConfig::default());
    }

    #[test]
    fn test_from_missing_file() {
        let result = ExtractionConfig::from_file(Path::new("/nonexistent/extract.yaml"));
        assert!(matches!(result, Err(ExtractError::Config(_))));
    }
}
