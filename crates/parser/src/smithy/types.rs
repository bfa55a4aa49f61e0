//! Smithy JSON AST type definitions
//!
//! These types represent the structure of Smithy JSON files. Member maps keep
//! the declaration order of the source document.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Trait ID to trait payload
pub type Traits = HashMap<String, serde_json::Value>;

/// Member name to member, in declaration order
pub type Members = IndexMap<String, Member>;

/// Root Smithy model document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmithyModel {
    /// Smithy version (e.g., "2.0")
    #[serde(default)]
    pub smithy: String,

    /// Shape definitions (operations, structures, services, etc.)
    #[serde(default)]
    pub shapes: HashMap<String, Shape>,

    /// Metadata about the model
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Type tags with a dedicated `Shape` variant
const KNOWN_KINDS: [&str; 13] = [
    "service",
    "operation",
    "structure",
    "union",
    "list",
    "map",
    "string",
    "integer",
    "long",
    "boolean",
    "blob",
    "double",
    "timestamp",
];

/// A Smithy shape (can be service, operation, structure, etc.)
///
/// Shapes whose `type` has no variant of their own deserialize into
/// `Shape::Other`, which keeps the type tag and any reference fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Service definition
    Service {
        /// API version
        #[serde(default)]
        version: Option<String>,

        /// Operations exposed by this service
        #[serde(default)]
        operations: Vec<ShapeReference>,

        /// Resources managed by this service
        #[serde(default)]
        resources: Vec<ShapeReference>,

        /// Traits (metadata)
        #[serde(default)]
        traits: Traits,
    },

    /// Operation definition
    Operation {
        /// Input shape
        #[serde(default)]
        input: Option<ShapeReference>,

        /// Output shape
        #[serde(default)]
        output: Option<ShapeReference>,

        /// Error shapes
        #[serde(default)]
        errors: Option<Vec<ShapeReference>>,

        /// Traits (metadata)
        #[serde(default)]
        traits: Traits,
    },

    /// Structure definition (input/output/error types)
    Structure {
        /// Member fields
        #[serde(default)]
        members: Members,

        /// Traits (metadata)
        #[serde(default)]
        traits: Traits,
    },

    /// Tagged union
    Union {
        /// Variants
        #[serde(default)]
        members: Members,

        /// Traits (metadata)
        #[serde(default)]
        traits: Traits,
    },

    /// List type
    List {
        /// Member type
        member: ShapeReference,

        /// Traits (metadata)
        #[serde(default)]
        traits: Traits,
    },

    /// Map type
    Map {
        /// Key type
        key: ShapeReference,

        /// Value type
        value: ShapeReference,

        /// Traits (metadata)
        #[serde(default)]
        traits: Traits,
    },

    /// String type (an enum when it carries `smithy.api#enum`)
    String {
        #[serde(default)]
        traits: Traits,
    },

    Integer {
        #[serde(default)]
        traits: Traits,
    },

    Long {
        #[serde(default)]
        traits: Traits,
    },

    Boolean {
        #[serde(default)]
        traits: Traits,
    },

    Blob {
        #[serde(default)]
        traits: Traits,
    },

    Double {
        #[serde(default)]
        traits: Traits,
    },

    Timestamp {
        #[serde(default)]
        traits: Traits,
    },

    /// Fallback for other shape types (set, resource, enum, ...)
    #[serde(skip)]
    Other(OtherShape),
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?;

        if KNOWN_KINDS.contains(&kind) {
            Shape::deserialize(value).map_err(D::Error::custom)
        } else {
            OtherShape::deserialize(value)
                .map(Shape::Other)
                .map_err(D::Error::custom)
        }
    }
}

impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Shape::Other(other) => other.serialize(serializer),
            _ => Shape::serialize(self, serializer),
        }
    }
}

/// A shape of a type without its own variant
///
/// Only the type tag and the reference fields are kept, so dependency
/// resolution still sees through it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherShape {
    /// Original `type` tag (e.g., "set")
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<ShapeReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<ShapeReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ShapeReference>>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub members: Members,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<ShapeReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ShapeReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ShapeReference>,
}

/// Reference to another shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeReference {
    /// Target shape ID (e.g., "com.amazonaws.dynamodb#TableName")
    pub target: String,
}

/// Structure or union member definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Target shape for this member
    pub target: String,

    /// Traits (metadata)
    #[serde(default)]
    pub traits: Traits,
}

/// One entry of a `smithy.api#enum` trait
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    /// Wire value
    pub value: String,

    /// Symbolic name; Smithy allows it to be omitted
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub documentation: Option<String>,
}

impl EnumDefinition {
    /// Name used in the rendered enum, falling back to the value
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.value)
    }
}

impl Shape {
    /// Smithy type keyword ("structure", "long", "set", ...)
    pub fn kind(&self) -> &str {
        match self {
            Shape::Service { .. } => "service",
            Shape::Operation { .. } => "operation",
            Shape::Structure { .. } => "structure",
            Shape::Union { .. } => "union",
            Shape::List { .. } => "list",
            Shape::Map { .. } => "map",
            Shape::String { .. } => "string",
            Shape::Integer { .. } => "integer",
            Shape::Long { .. } => "long",
            Shape::Boolean { .. } => "boolean",
            Shape::Blob { .. } => "blob",
            Shape::Double { .. } => "double",
            Shape::Timestamp { .. } => "timestamp",
            Shape::Other(other) => &other.kind,
        }
    }

    /// Traits attached to the shape itself
    pub fn traits(&self) -> Option<&Traits> {
        match self {
            Shape::Service { traits, .. }
            | Shape::Operation { traits, .. }
            | Shape::Structure { traits, .. }
            | Shape::Union { traits, .. }
            | Shape::List { traits, .. }
            | Shape::Map { traits, .. }
            | Shape::String { traits }
            | Shape::Integer { traits }
            | Shape::Long { traits }
            | Shape::Boolean { traits }
            | Shape::Blob { traits }
            | Shape::Double { traits }
            | Shape::Timestamp { traits } => Some(traits),
            Shape::Other(_) => None,
        }
    }

    /// Outgoing shape references, in resolution order:
    /// input, output, errors, members, member, key, value
    pub fn references(&self) -> Vec<&str> {
        match self {
            Shape::Operation {
                input,
                output,
                errors,
                ..
            } => input
                .iter()
                .chain(output.iter())
                .chain(errors.iter().flatten())
                .map(|r| r.target.as_str())
                .collect(),
            Shape::Structure { members, .. } | Shape::Union { members, .. } => {
                members.values().map(|m| m.target.as_str()).collect()
            }
            Shape::List { member, .. } => vec![member.target.as_str()],
            Shape::Map { key, value, .. } => vec![key.target.as_str(), value.target.as_str()],
            Shape::Other(other) => other
                .input
                .iter()
                .chain(other.output.iter())
                .chain(other.errors.iter().flatten())
                .map(|r| r.target.as_str())
                .chain(other.members.values().map(|m| m.target.as_str()))
                .chain(
                    other
                        .member
                        .iter()
                        .chain(other.key.iter())
                        .chain(other.value.iter())
                        .map(|r| r.target.as_str()),
                )
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Severity of the `smithy.api#error` trait ("client" or "server")
    pub fn error_trait(&self) -> Option<&str> {
        self.traits()?.get(traits::ERROR)?.as_str()
    }

    /// Entries of the `smithy.api#enum` trait on a string shape
    ///
    /// Returns `None` when the shape is not a string, has no enum trait,
    /// or the payload is not a list of enum definitions.
    pub fn enum_values(&self) -> Option<Vec<EnumDefinition>> {
        let Shape::String { traits } = self else {
            return None;
        };
        let payload = traits.get(traits::ENUM)?;
        serde_json::from_value(payload.clone()).ok()
    }

    /// Documentation string of the shape
    pub fn documentation(&self) -> Option<&str> {
        documentation(self.traits()?)
    }
}

impl Member {
    /// Whether the member carries `smithy.api#required`
    pub fn is_required(&self) -> bool {
        self.traits.contains_key(traits::REQUIRED)
    }

    /// Documentation string of the member
    pub fn documentation(&self) -> Option<&str> {
        documentation(&self.traits)
    }
}

fn documentation(traits: &Traits) -> Option<&str> {
    traits.get(traits::DOCUMENTATION)?.as_str()
}

impl SmithyModel {
    /// Get a shape by its ID
    pub fn get_shape(&self, shape_id: &str) -> Option<&Shape> {
        self.shapes.get(shape_id)
    }
}

/// Common Smithy trait names
pub mod traits {
    pub const DOCUMENTATION: &str = "smithy.api#documentation";
    pub const REQUIRED: &str = "smithy.api#required";
    pub const ERROR: &str = "smithy.api#error";
    pub const ENUM: &str = "smithy.api#enum";
}
